use daybook_core::theme::Theme;
use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Builds the termimad skin for the persisted theme preference.
pub fn skin_for(theme: Theme) -> MadSkin {
    match theme {
        Theme::Dark => dark_skin(),
        Theme::Light => light_skin(),
    }
}

fn dark_skin() -> MadSkin {
    let mut skin = MadSkin::default();

    skin.paragraph.set_fg(FG);
    skin.bold.set_fg(FG);
    skin.italic.set_fg(COMMENT);

    skin.headers[0].set_fg(RED);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[0].align = Alignment::Left;

    skin.headers[1].set_fg(YELLOW);
    skin.headers[1].add_attr(Attribute::Bold);

    skin.bullet.set_fg(RED);
    skin.inline_code.set_fg(GREEN);
    skin.inline_code.set_bg(BG);

    skin
}

fn light_skin() -> MadSkin {
    let mut skin = MadSkin::default_light();

    skin.headers[0].set_fg(Color::DarkRed);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[0].align = Alignment::Left;

    skin.headers[1].set_fg(Color::DarkYellow);
    skin.headers[1].add_attr(Attribute::Bold);

    skin.bullet.set_fg(Color::DarkRed);
    skin.inline_code.set_fg(Color::DarkGreen);

    skin
}

// OneDark palette
const BG: Color = Color::Rgb {
    r: 0x28,
    g: 0x2C,
    b: 0x34,
}; // #282C34
const FG: Color = Color::Rgb {
    r: 0xAB,
    g: 0xB2,
    b: 0xBF,
}; // #ABB2BF
const RED: Color = Color::Rgb {
    r: 0xE0,
    g: 0x6C,
    b: 0x75,
}; // #E06C75
const YELLOW: Color = Color::Rgb {
    r: 0xE5,
    g: 0xC0,
    b: 0x7B,
}; // #E5C07B
const GREEN: Color = Color::Rgb {
    r: 0x98,
    g: 0xC3,
    b: 0x79,
}; // #98C379
const COMMENT: Color = Color::Rgb {
    r: 0x5C,
    g: 0x63,
    b: 0x70,
}; // #5C6370
