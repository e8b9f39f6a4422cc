//! 차트 페이로드 모듈.

pub mod charts;

pub use charts::{ChartPoint, ChartSeries};
