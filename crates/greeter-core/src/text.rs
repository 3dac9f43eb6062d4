//! Literal UI strings.
//!
//! These are matched verbatim by existing golden-output checks, so they
//! must not be reworded.

pub const WINDOW_TITLE: &str = "Nuitka + Tkinter 测试";
pub const PROMPT_LABEL: &str = "请输入你的名字：";
pub const GREET_BUTTON: &str = "点击问候";
pub const DISMISS_BUTTON: &str = "确定";

pub const GREETING_TITLE: &str = "问候";
pub const GREETING_PREFIX: &str = "你好，";
pub const GREETING_SUFFIX: &str = "！";

pub const EMPTY_NAME_TITLE: &str = "提示";
pub const EMPTY_NAME_MESSAGE: &str = "请输入名字哦～";
