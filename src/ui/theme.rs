use ratatui::style::Color;

pub const FAVORITE_ACTIVE: Color = Color::Rgb(0xf4, 0x3f, 0x5e);
pub const RATING_STAR: Color = Color::Rgb(0xfd, 0xe0, 0x47);
pub const RECOMMENDED_TAG: Color = Color::Rgb(0xfc, 0xa5, 0xa5);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const TAB_ACTIVE: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SLIDE_DOT: Color = Color::Rgb(0x80, 0x80, 0x80);
pub const SLIDE_DOT_ACTIVE: Color = Color::Rgb(0xff, 0xff, 0xff);
