// App layer: rendering and output of the gauge.

pub mod gauge;
pub mod page;
pub mod report;
pub mod sink;
