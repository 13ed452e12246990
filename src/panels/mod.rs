pub mod parameters_ui;
pub mod waterfall_ui;

pub use parameters_ui::{ParametersPanel, ResultTexts};
pub use waterfall_ui::WaterfallPanel;
