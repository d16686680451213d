//! Icon definitions (lucide set).

use icondata::Icon;

pub const CHEVRON_RIGHT: Icon = icondata::LuChevronRight;
pub const FOLDER: Icon = icondata::LuFolder;
pub const FILE_TEXT: Icon = icondata::LuFileText;
pub const TERMINAL: Icon = icondata::LuTerminal;
