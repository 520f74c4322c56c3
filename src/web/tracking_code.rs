use std::fmt::Write;

use maud::{PreEscaped, Render};

use crate::opts::Opts;
use crate::prelude::*;

/// Google Analytics snippet injected into every page, empty unless configured.
#[must_use]
#[derive(Clone)]
pub struct TrackingCode(PreEscaped<String>);

impl TrackingCode {
    pub fn new(opts: &Opts) -> Result<Self> {
        let mut code = String::new();
        if let Some(measurement_id) = &opts.gtag {
            write!(
                code,
                r#"<script async src="https://www.googletagmanager.com/gtag/js?id={measurement_id}"></script> <script>window.dataLayer = window.dataLayer || []; function gtag(){{dataLayer.push(arguments);}} gtag('js', new Date()); gtag('config', '{measurement_id}'); </script>"#,
            )?;
        };
        Ok(Self(PreEscaped(code)))
    }
}

impl Default for TrackingCode {
    fn default() -> Self {
        Self(PreEscaped(String::new()))
    }
}

impl Render for &TrackingCode {
    fn render_to(&self, buffer: &mut String) {
        self.0.render_to(buffer);
    }
}
