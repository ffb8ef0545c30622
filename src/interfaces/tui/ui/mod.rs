// UI submodules
mod campaigns;
mod channels;
mod common;
mod confirm;
mod dashboard;
mod exiting;
mod help;
mod login;
mod not_found;
mod sites;
mod targets;
mod token_generator;
mod tokens;
mod trackers;
pub mod widgets;

// Re-export common utilities
pub use common::{draw_footer, draw_sidebar, draw_title_bar};

// Re-export screen drawing functions
pub use campaigns::draw_campaigns_screen;
pub use channels::draw_channels_screen;
pub use dashboard::draw_dashboard_screen;
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use login::draw_login_screen;
pub use not_found::draw_not_found_screen;
pub use sites::draw_sites_screen;
pub use targets::draw_targets_screen;
pub use token_generator::draw_generator_screen;
pub use tokens::draw_tokens_screen;
pub use trackers::draw_trackers_screen;

use super::app::{App, Overlay};
use super::constants::SIDEBAR_WIDTH;
use crate::router::Route;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.route == Route::Login {
        draw_login_screen(frame, app, area);
    } else {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(10),   // Sidebar + content
                Constraint::Length(2), // Footer
            ])
            .split(area);

        draw_title_bar(frame, app, main_chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
            .split(main_chunks[1]);
        draw_sidebar(frame, app, body[0]);

        let content = body[1];
        match app.route {
            Route::Dashboard => draw_dashboard_screen(frame, app, content),
            Route::Trackers => draw_trackers_screen(frame, app, content),
            Route::Campaigns => draw_campaigns_screen(frame, app, content),
            Route::Channels => draw_channels_screen(frame, app, content),
            Route::Targets => draw_targets_screen(frame, app, content),
            Route::Sites => draw_sites_screen(frame, app, content),
            Route::Tokens => draw_tokens_screen(frame, app, content),
            Route::TokenGenerator => draw_generator_screen(frame, app, content),
            Route::NotFound => draw_not_found_screen(frame, content),
            Route::Login => {}
        }

        draw_footer(frame, app, main_chunks[2]);
    }

    match app.overlay {
        Overlay::Help => draw_help_screen(frame, area),
        Overlay::Exiting => draw_exiting_screen(frame, app, area),
        Overlay::None => {}
    }

    // toast 始终在最上层
    widgets::render_toasts(frame, area, &app.ctx().toasts().snapshot());
}
