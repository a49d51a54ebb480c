// Weather dashboard - Data-to-visualization pipeline and its serving shell
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
