pub mod app;
pub mod colors;
pub mod dialog;
pub mod form;
pub mod table;
pub mod ui;

use std::sync::Arc;

use crate::directory::EmployeeDirectory;

/// Entry point: take over the terminal and run the search screen
pub fn run(directory: Arc<dyn EmployeeDirectory>) -> crate::Result<()> {
    let mut terminal = ratatui::init();
    let mut app = app::App::new(directory);
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}
