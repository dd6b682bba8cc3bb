/// UI layer: panel composition and chart rendering.
pub mod charts;
pub mod panels;
