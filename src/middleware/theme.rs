use crate::theme::{Theme, THEME_SESSION_KEY};
use actix_session::SessionExt;
use actix_utils::future::{ready, Ready};
use actix_web::{
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use std::{future::Future, pin::Pin};

// Middleware Factory
pub struct ThemeMiddleware;

// Middleware Service
pub struct ThemeService<S> {
    service: S,
}

impl<S, B> Transform<S, ServiceRequest> for ThemeMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = ThemeService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ThemeService { service }))
    }
}

impl<S, B> Service<ServiceRequest> for ThemeService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let session = req.get_session();

        match session.get::<Theme>(THEME_SESSION_KEY) {
            Ok(Some(theme)) => {
                req.extensions_mut().insert::<Theme>(theme);
            }
            Ok(None) => {}
            Err(e) => {
                log::warn!("discarding unreadable theme from session: {}", e);
                session.remove(THEME_SESSION_KEY);
            }
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res)
        })
    }
}

impl FromRequest for Theme {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let theme = req.extensions().get::<Theme>().copied().unwrap_or_default();

        ready(Ok(theme))
    }
}
