//! deerfm: 탭 기반 파일 관리자
//!
//! UI 상태 저장소(`app`)와 파일시스템 권한을 가진 서비스(`system::service`)가
//! `ipc` 채널로만 대화한다.

pub mod app;
pub mod config;
pub mod core;
pub mod ipc;
pub mod models;
pub mod shell;
pub mod system;
pub mod utils;
