// UI <-> 파일시스템 서비스 메시지 채널
pub mod bridge;
pub mod messages;

pub use bridge::{bridge, EventSender, RequestSender, ServicePort, UiPort};
pub use messages::{Event, MenuCommand, Request};
