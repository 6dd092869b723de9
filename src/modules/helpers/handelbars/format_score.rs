use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
    RenderErrorReason,
};

use crate::modules::helpers::math::Math;

/// # score formatting helper
/// a formatter to display points without float noise
///
/// ### usage
/// ```handlebars
/// {{formatScore 8.0}}
/// {{formatScore 3.3333}}
/// ```
///
/// ### output
/// ```text
/// 8
/// 3.33
/// ```
#[derive(Clone, Copy)]
pub struct FormatScore;

impl HelperDef for FormatScore {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 1)?;

        let score = match helper.param(0).and_then(|param| param.value().as_f64()) {
            Some(score) => score,
            None => return Err(RenderErrorReason::InvalidParamType("number").into()),
        };

        out.write(&Math::format_score(score))?;
        Ok(())
    }
}

pub fn check_param_count(h: &Helper, n: u64) -> Result<(), RenderError> {
    if h.params().len() != n as usize {
        return Err(RenderErrorReason::Other(format!(
            "Wrong number of arguments for helper \"{}\", {n} was expected but {} were given",
            h.name(),
            h.params().len()
        ))
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> Handlebars<'static> {
        let mut handlebars = Handlebars::new();
        handlebars.register_helper("formatScore", Box::new(FormatScore));
        handlebars
    }

    #[test]
    fn formats_numbers_from_the_context() {
        let rendered = registry()
            .render_template("{{formatScore a}} {{formatScore b}}", &json!({"a": 8.0, "b": 2.346}))
            .unwrap();

        assert_eq!(rendered, "8 2.35");
    }

    #[test]
    fn rejects_wrong_arguments() {
        assert!(registry().render_template("{{formatScore}}", &json!({})).is_err());
        assert!(registry().render_template("{{formatScore \"x\"}}", &json!({})).is_err());
    }
}
