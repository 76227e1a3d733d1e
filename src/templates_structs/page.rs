use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub app_name: &'static str,
    pub suggestions: Vec<&'static str>,
    pub max_reconnect_attempts: u32,
}
