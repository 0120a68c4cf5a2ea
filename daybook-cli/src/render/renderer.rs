use super::skin::skin_for;
use daybook_core::theme::Theme;
use termimad::MadSkin;

#[derive(Clone)]
pub struct RenderOptions {
    pub theme: Theme,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    use_color: bool,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self {
            skin: skin_for(opts.theme),
            use_color: opts.use_color,
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.use_color {
            self.skin.print_text(md);
        } else {
            print!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.use_color {
            let md = format!("*{message}*\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }
}
