//! 测试辅助：在随机端口上启动返回固定响应的 HTTP 服务

use actix_web::{http::StatusCode, web, App, HttpResponse, HttpServer};
use std::net::{SocketAddr, TcpListener};
use std::time::Duration;

/// 启动一个对任意路径都返回 `status` + `body` 的服务，响应前等待 `delay`
///
/// 必须在 actix 运行时中调用（`#[actix_web::test]`）
pub fn spawn_fake_server(status: StatusCode, body: &str, delay: Duration) -> SocketAddr {
    let body = body.to_string();

    let server = HttpServer::new(move || {
        let body = body.clone();
        App::new().default_service(web::to(move || {
            let body = body.clone();
            async move {
                actix_web::rt::time::sleep(delay).await;
                HttpResponse::build(status)
                    .content_type("application/json")
                    .body(body)
            }
        }))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    addr
}

/// 一个当前没有任何服务监听的本地地址
pub fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}
