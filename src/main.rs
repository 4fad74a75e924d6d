mod animation;
mod asset;
mod config;
mod form;
mod middleware;
mod template;
mod theme;

use actix_session::config::PersistentSession;
use actix_session::storage::CookieSessionStore;
use actix_session::{Session, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::{cookie, error, web};
use actix_web::{App, HttpRequest, HttpResponse, HttpResponseBuilder, HttpServer, Result};
use askama::Template;
use form::submission::{FormState, Outcome, SimulatedSubmitter, SubmissionState, Submitter};
use form::user::{LoginFormData, RegisterFormData};
use serde::Deserialize;
use theme::{Theme, ThemeFormData, THEME_SESSION_KEY};

#[derive(Deserialize, Default, Debug)]
struct LoginQuery {
    message: Option<String>,
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .append_header(("Location", location))
        .finish()
}

/// Status for a form that comes back to the user instead of redirecting.
fn rejected(state: SubmissionState) -> HttpResponseBuilder {
    match state {
        SubmissionState::Failed => HttpResponse::InternalServerError(),
        _ => HttpResponse::UnprocessableEntity(),
    }
}

fn render(mut builder: HttpResponseBuilder, template: &impl Template) -> Result<HttpResponse> {
    let content = template.render().map_err(error::ErrorInternalServerError)?;

    Ok(builder.content_type("text/html").body(content))
}

async fn index(theme: Theme) -> Result<HttpResponse> {
    render(HttpResponse::Ok(), &template::IndexTemplate::new(theme))
}

async fn login_ui(theme: Theme, query: web::Query<LoginQuery>) -> Result<HttpResponse> {
    let state = FormState::new(LoginFormData::default());
    let template = template::user::LoginTemplate::new(&state, theme, query.into_inner().message);

    render(HttpResponse::Ok(), &template)
}

async fn login<S: Submitter + 'static>(
    theme: Theme,
    submitter: web::Data<S>,
    form: web::Form<LoginFormData>,
) -> Result<HttpResponse> {
    let mut state = FormState::new(form.into_inner());

    if let Outcome::Redirect(location) = state.submit(submitter.get_ref()).await {
        return Ok(see_other(&location));
    }

    render(rejected(state.state()), &template::user::LoginTemplate::new(&state, theme, None))
}

async fn register_ui(theme: Theme) -> Result<HttpResponse> {
    let state = FormState::new(RegisterFormData::default());

    render(
        HttpResponse::Ok(),
        &template::user::RegisterTemplate::new(&state, theme),
    )
}

async fn register<S: Submitter + 'static>(
    theme: Theme,
    submitter: web::Data<S>,
    form: web::Form<RegisterFormData>,
) -> Result<HttpResponse> {
    let mut state = FormState::new(form.into_inner());

    if let Outcome::Redirect(location) = state.submit(submitter.get_ref()).await {
        return Ok(see_other(&location));
    }

    render(rejected(state.state()), &template::user::RegisterTemplate::new(&state, theme))
}

async fn toggle_theme(
    theme: Theme,
    session: Session,
    form: web::Form<ThemeFormData>,
) -> Result<HttpResponse> {
    let theme = theme.toggle();

    session
        .insert(THEME_SESSION_KEY, theme)
        .map_err(error::ErrorInternalServerError)?;

    log::debug!("theme switched to {}", theme.as_str());

    Ok(see_other(form.location()))
}

async fn default_handler(theme: Theme, req: HttpRequest) -> Result<HttpResponse> {
    let template = template::error::NotFoundErrorTemplate::new(theme, req.path());

    render(HttpResponse::NotFound(), &template)
}

fn routes<S: Submitter + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .service(
            web::resource("/login")
                .route(web::get().to(login_ui))
                .route(web::post().to(login::<S>)),
        )
        .service(
            web::resource("/register")
                .route(web::get().to(register_ui))
                .route(web::post().to(register::<S>)),
        )
        .service(web::resource("/theme").route(web::post().to(toggle_theme)))
        .service(web::resource("/static/cookit.js").route(web::get().to(asset::script)));
}

fn session_middleware(key: Key, ttl_hours: i64) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .session_lifecycle(
            PersistentSession::default().session_ttl(cookie::time::Duration::hours(ttl_hours)),
        )
        .build()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = config::Settings::from_env().map_err(|e| {
        log::error!("configuration error: {}", e);

        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let submitter = web::Data::new(SimulatedSubmitter::new(settings.submit_delay));
    let ttl_hours = settings.session_ttl_hours();
    let key = Key::generate();

    log::info!(
        "starting HTTP server at http://{}:{} (submit delay {:?})",
        settings.host,
        settings.port,
        submitter.delay()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(submitter.clone())
            .wrap(middleware::theme::ThemeMiddleware)
            .wrap(session_middleware(key.clone(), ttl_hours))
            .wrap(actix_web::middleware::Logger::default())
            .default_service(web::route().to(default_handler))
            .configure(routes::<SimulatedSubmitter>)
    })
    .bind((settings.host.as_str(), settings.port))?
    .workers(settings.workers)
    .run()
    .await
}
