use minijinja::{context, Environment};

use crate::libraries::map_renderer::leaflet_assets;
use crate::models::MapPage;

const INDEX_TEMPLATE: &str = "index.html";

/// Compiled page templates
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, include_str!("../../templates/index.html"))?;
        Ok(Self { env })
    }

    pub fn render_index(&self, page: &MapPage) -> Result<String, minijinja::Error> {
        self.env.get_template(INDEX_TEMPLATE)?.render(context! {
            leaflet_assets => leaflet_assets(),
            first => &page.first,
            second => &page.second,
            distance => page.distance_display(),
            map_html => &page.map_html,
        })
    }
}
