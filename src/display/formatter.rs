//! Markdown terminal formatting using termimad

use termimad::MadSkin;
use tracing::warn;

use crate::display::terminal::should_use_colors;

/// Print markdown to terminal with rich formatting (or plain fallback)
pub fn print_markdown(markdown: &str) {
    if should_use_colors() {
        if let Err(e) = print_rich(markdown) {
            warn!(error = %e, "terminal rendering failed, using plain output");
            print_plain(markdown);
        }
    } else {
        print_plain(markdown);
    }
}

fn print_rich(markdown: &str) -> Result<(), termimad::Error> {
    let skin = practice_skin();
    skin.write_text(markdown)?;
    Ok(())
}

/// Cyan title, green answers
fn practice_skin() -> MadSkin {
    use termimad::crossterm::style::{Attribute, Color::*};

    let mut skin = MadSkin::default();
    skin.headers[0].set_fg(Cyan);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.bold.set_fg(Green);
    skin.bold.add_attr(Attribute::Bold);
    skin.italic.set_fg(Grey);
    skin
}

fn print_plain(markdown: &str) {
    println!("{}", markdown);
}
