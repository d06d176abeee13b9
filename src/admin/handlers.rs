/// `GET /admin/main`
pub async fn main_page() -> &'static str {
    "nice you are on the secret admin main page"
}
