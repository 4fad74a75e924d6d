use actix_web::{http::header, HttpResponse};

pub const SCRIPT: &str = include_str!("../../static/cookit.js");

pub async fn script() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .insert_header((header::CACHE_CONTROL, "public, max-age=3600"))
        .body(SCRIPT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_waits_for_the_rendered_threshold() {
        assert!(SCRIPT.contains("parseFloat(el.getAttribute('data-threshold')"));
        assert!(SCRIPT.contains("entry.isIntersecting && entry.intersectionRatio >= threshold"));
        assert!(SCRIPT.contains("observer.disconnect()"));
        assert!(SCRIPT.contains("Math.min(parseInt(el.getAttribute('data-delay')"));
    }

    #[test]
    fn editing_an_input_restores_its_valid_classes() {
        assert!(SCRIPT.contains("error.remove()"));
        assert!(SCRIPT.contains("input.getAttribute('data-valid-class')"));
    }

    #[actix_web::test]
    async fn script_is_served_as_javascript() {
        let res = script().await;
        assert!(res.status().is_success());
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/javascript; charset=utf-8"
        );
        let body = actix_web::body::to_bytes(res.into_body()).await.unwrap();
        assert_eq!(body, SCRIPT.as_bytes());
    }
}
