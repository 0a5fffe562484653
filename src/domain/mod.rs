// Domain layer - Section, chart and widget models
pub mod chart;
pub mod dashboard;
pub mod section;
pub mod widgets;
