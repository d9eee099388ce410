use std::{io, net::SocketAddr, time::Duration};

use axum::Router;
use fleet_gateway::{aggregate::StatusAggregator, api, AppState};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

/// 汎用的にテスト用のHTTPサーバーを起動するためのユーティリティ
#[allow(dead_code)]
pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<(), io::Error>>,
}

#[allow(dead_code)]
impl TestServer {
    /// サーバーがバインドしているアドレスを返す
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// `http://addr` 形式のベースURL
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// サーバーを停止し、バックグラウンドタスクの終了を待つ
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        let _ = self.handle.await;
    }
}

/// 任意のルーターを実ポートにバインドして起動する
#[allow(dead_code)]
pub async fn spawn_router(router: Router) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = rx.await;
            })
            .await
    });

    TestServer {
        addr,
        shutdown: Some(tx),
        handle,
    }
}

/// 指定したworker群を集約するgatewayルーターを作成する
#[allow(dead_code)]
pub fn gateway_app(endpoints: Vec<String>, timeout: Duration) -> Router {
    let aggregator = StatusAggregator::new(endpoints, timeout).expect("failed to build client");
    api::create_router(AppState {
        aggregator: std::sync::Arc::new(aggregator),
    })
}

/// 接続を拒否するベースURL（一度バインドしたポートを解放して返す）
#[allow(dead_code)]
pub async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
