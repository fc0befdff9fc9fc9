use ratatui::style::Color;

use crate::employee::EnrollmentStatus;

/// Chrome strip background (title bar)
pub const CHROME_BG: Color = Color::Rgb(40, 40, 50);
/// Table header and status bar background
pub const HEADER_BG: Color = Color::Rgb(0, 95, 135);
/// Alternating row background
pub const ROW_ALT_BG: Color = Color::Rgb(25, 25, 35);
/// Selected row background
pub const ROW_SELECTED_BG: Color = Color::Rgb(60, 60, 80);

/// Badge color for an enrollment status, mirroring the green/red/yellow
/// scheme the records were presented with originally
pub fn status_color(status: EnrollmentStatus) -> Color {
    match status {
        EnrollmentStatus::Enrolled => Color::Green,
        EnrollmentStatus::NotEnrolled => Color::Red,
        EnrollmentStatus::InProcess => Color::Yellow,
    }
}
