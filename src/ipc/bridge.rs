use crate::ipc::messages::{Event, Request};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// UI 쪽 포트: 요청을 보내고 이벤트를 받는다
#[derive(Debug)]
pub struct UiPort {
    pub requests: RequestSender,
    pub events: UnboundedReceiver<Event>,
}

/// 서비스 쪽 포트: 요청을 받고 이벤트를 보낸다
#[derive(Debug)]
pub struct ServicePort {
    pub requests: UnboundedReceiver<Request>,
    pub events: EventSender,
}

/// 요청 송신자 (fire-and-forget)
#[derive(Debug, Clone)]
pub struct RequestSender(UnboundedSender<Request>);

impl RequestSender {
    /// 상대가 닫혔으면 로그만 남기고 버린다
    pub fn send(&self, request: Request) {
        if let Err(err) = self.0.send(request) {
            log::warn!("filesystem service is gone, dropping {:?}", err.0);
        }
    }
}

/// 이벤트 송신자 (fire-and-forget)
#[derive(Debug, Clone)]
pub struct EventSender(UnboundedSender<Event>);

impl EventSender {
    pub fn send(&self, event: Event) {
        if let Err(err) = self.0.send(event) {
            log::warn!("ui is gone, dropping {:?}", err.0);
        }
    }
}

/// 연결된 포트 한 쌍 생성
pub fn bridge() -> (UiPort, ServicePort) {
    let (request_tx, request_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    (
        UiPort {
            requests: RequestSender(request_tx),
            events: event_rx,
        },
        ServicePort {
            requests: request_rx,
            events: EventSender(event_tx),
        },
    )
}
