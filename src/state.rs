/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 * - Clone is cheap (Arc fields only)
 */
use std::sync::Arc;

use minijinja::Environment;

use crate::config::Config;

static INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<Config>,
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    /// Compiles the page template once; handlers only render.
    pub fn new(config: Arc<Config>) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("index.html", INDEX_TEMPLATE)?;

        Ok(Self {
            config,
            templates: Arc::new(env),
        })
    }
}
