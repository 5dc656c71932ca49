#![forbid(unsafe_code)]

use poem::error::NotFoundError;
use poem::http::Method;
use poem::web::Html;
use poem::{handler, Result};

// ***************************************************************************
//                                Constants
// ***************************************************************************
// The greeting document is fixed at build time; every response carries
// exactly these bytes.
const GREETING_HTML : &str = r#"
    <div style="
      font-family: Arial, sans-serif;
      text-align: center;
      margin-top: 100px;
    ">
      <h1>🚀 Welcome to <span style="color:#0070f3;">WEXA AI</span></h1>
      <h2>Your DevOps & Cloud Innovation Partner</h2>
      <p>Empowering businesses with automation, scalability, and intelligent cloud solutions.</p>
      <hr style="width:60%; margin: 20px auto;">
      <p style="color:gray;">WEXA AI Sample App • Powered by Rajesh Kurumoju</p>
    </div>
"#;

// ***************************************************************************
//                              Greeting Endpoint
// ***************************************************************************
// ---------------------------------------------------------------------------
// get_greeting:
// ---------------------------------------------------------------------------
/** Serve the greeting page on the root route.  Only GET is served; every
 * other method receives the same not-found response as an unmatched path.
 * Nothing else is read from the request.
 */
#[handler]
pub fn get_greeting(method: Method) -> Result<Html<&'static str>> {
    if method != Method::GET {
        return Err(NotFoundError.into());
    }
    Ok(Html(GREETING_HTML))
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem::Route;

    use super::*;

    fn test_client() -> TestClient<Route> {
        TestClient::new(Route::new().at("/", get_greeting))
    }

    #[test]
    fn greeting_carries_brand_name() {
        assert!(GREETING_HTML.contains("WEXA AI"));
    }

    #[tokio::test]
    async fn get_root_returns_greeting() {
        let resp = test_client().get("/").send().await;
        resp.assert_status_is_ok();
        resp.assert_header("content-type", "text/html; charset=utf-8");
        resp.assert_text(GREETING_HTML).await;
    }

    #[tokio::test]
    async fn repeated_requests_get_identical_bodies() {
        let cli = test_client();
        let first = cli.get("/").send().await;
        first.assert_text(GREETING_HTML).await;
        let second = cli.get("/").send().await;
        second.assert_text(GREETING_HTML).await;
    }

    #[tokio::test]
    async fn unmatched_path_is_not_found() {
        let resp = test_client().get("/greeting").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_get_methods_are_not_found() {
        let cli = test_client();
        let resp = cli.post("/").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
        let resp = cli.delete("/").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
    }
}
