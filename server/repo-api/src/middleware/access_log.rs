use std::{
    convert::Infallible,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use axum::{
    extract::Request,
    http::Method,
    response::Response,
    routing::{future::RouteFuture, Route},
};
use futures::ready;
use tower_layer::Layer;
use tower_service::Service;
use tracing::{info, warn};

/// Logs method, path, status and latency of every served request.
#[derive(Clone, Copy)]
pub struct AccessLog;
#[derive(Clone)]
pub struct AccessLogService(Route);
pub struct AccessLogFuture {
    inner: Pin<Box<RouteFuture<Infallible>>>,
    method: Method,
    path: String,
    start: Instant,
}

impl Layer<Route> for AccessLog {
    type Service = AccessLogService;

    fn layer(&self, inner: Route) -> Self::Service {
        AccessLogService(inner)
    }
}

impl Service<Request> for AccessLogService {
    type Response = Response;
    type Error = Infallible;
    type Future = AccessLogFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        AccessLogFuture {
            inner: Box::pin(self.0.call(req)),
            method,
            path,
            start: Instant::now(),
        }
    }
}

impl Future for AccessLogFuture {
    type Output = Result<Response, Infallible>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let response = match ready!(self.inner.as_mut().poll(cx)) {
            Ok(response) => response,
            Err(never) => match never {},
        };

        let status = response.status();
        let elapsed = self.start.elapsed();
        if status.is_server_error() {
            warn!("{} {} -> {} in {:?}", self.method, self.path, status, elapsed);
        } else {
            info!("{} {} -> {} in {:?}", self.method, self.path, status, elapsed);
        }

        Poll::Ready(Ok(response))
    }
}
