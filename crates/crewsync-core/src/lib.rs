//! crewsync-core
//!
//! Client-side synchronization core for the CrewSync HR dashboard.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, status, task, user, snapshot, capability）
//! - **ports**: 抽象化レイヤー（TaskApi, NotificationSink, Clock）
//! - **api**: REST クライアント（wire 型 + reqwest 実装）
//! - **sync**: 同期ループ（store, actions, poller）
//! - **nav**: ロール別ナビゲーション（pure function）
//! - **config / error / observability**: 横断的な部品
//!
//! The core loop: the poller fetches the authoritative task list on a fixed
//! interval, the snapshot diff reports status transitions through the
//! notification sink, and user-initiated mutations patch local state only
//! after the backend confirms them.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod nav;
pub mod observability;
pub mod ports;
pub mod sync;
