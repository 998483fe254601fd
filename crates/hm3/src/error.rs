use std::borrow::Cow;

#[hm3_derive::hm3_error]
pub enum BuildError {
    #[error("Settings{}: {source}", format_context(.context))]
    Kernel { source: hm3_kernel::KernelError, context: Option<Cow<'static, str>> },

    #[error("Module scan{}: {source}", format_context(.context))]
    Module { source: hm3_modules::ModuleError, context: Option<Cow<'static, str>> },

    #[error("Asset compilation{}: {source}", format_context(.context))]
    Asset { source: hm3_assets::AssetError, context: Option<Cow<'static, str>> },

    #[error("Config persistence{}: {source}", format_context(.context))]
    Rc { source: hm3_rc::RcError, context: Option<Cow<'static, str>> },

    #[error("Production site{}: {source}", format_context(.context))]
    Site { source: hm3_site::SiteError, context: Option<Cow<'static, str>> },
}
