pub mod notice;
pub mod session;
pub mod storage;
pub mod theme;

pub use notice::{provide_notice_context, use_notices, Notice, NoticeContext, NoticeKind};
pub use session::{provide_session_context, use_session, Session, SessionContext, SessionQuery};
pub use theme::{provide_theme_context, use_theme, Theme, ThemeContext, ThemeStore};
