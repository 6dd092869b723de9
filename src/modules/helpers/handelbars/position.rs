use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderErrorReason,
};

use crate::modules::helpers::handelbars::format_score::check_param_count;

/// # ranking position helper
/// turns the zero based `@index` of an `#each` block into a position in the ranking
///
/// ### usage
/// ```handlebars
/// {{#each ranking}}{{position @index}}. {{runner}}{{/each}}
/// ```
#[derive(Clone, Copy)]
pub struct Position;

impl HelperDef for Position {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 1)?;

        match helper.param(0).and_then(|param| param.value().as_u64()) {
            Some(index) => out.write(&(index + 1).to_string())?,
            None => return Err(RenderErrorReason::InvalidParamType("unsigned integer").into()),
        }

        Ok(())
    }
}
