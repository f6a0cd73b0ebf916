//! Links to admin change views.
//!
//! The change view for a model is registered as
//! `<namespace>:<app_label>_<model_name>_change` and takes the object's
//! primary key as its only argument.

use djave_url_core::{Settings, UrlResult};

use crate::routing::ReverseResolver;

/// Metadata identifying a model instance.
pub trait ModelMeta {
    /// The label of the app the model belongs to (e.g. `"maintenance"`).
    fn app_label(&self) -> &str;
    /// The lowercase model name (e.g. `"workorder"`).
    fn model_name(&self) -> &str;
    /// The primary key, rendered for a URL.
    fn pk(&self) -> String;
}

/// A plain [`ModelMeta`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRef {
    /// App label.
    pub app_label: String,
    /// Model name.
    pub model_name: String,
    /// Primary key.
    pub pk: String,
}

impl ModelRef {
    /// Creates a new `ModelRef`.
    pub fn new(
        app_label: impl Into<String>,
        model_name: impl Into<String>,
        pk: impl ToString,
    ) -> Self {
        Self {
            app_label: app_label.into(),
            model_name: model_name.into(),
            pk: pk.to_string(),
        }
    }
}

impl ModelMeta for ModelRef {
    fn app_label(&self) -> &str {
        &self.app_label
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn pk(&self) -> String {
        self.pk.clone()
    }
}

/// Builds the admin edit URL for an object type and primary key.
pub trait AdminLinkBuilder {
    /// `type_name` is `"<app_label>_<model_name>"`.
    fn build_edit_url(&self, type_name: &str, primary_key: &str) -> UrlResult<String>;
}

/// An [`AdminLinkBuilder`] backed by a reverse resolver.
#[derive(Debug, Clone)]
pub struct AdminSite<R> {
    resolver: R,
    namespace: String,
}

impl<R: ReverseResolver> AdminSite<R> {
    /// Uses the default `admin` namespace.
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            namespace: "admin".to_string(),
        }
    }

    /// Uses `settings.admin_namespace`.
    pub fn from_settings(resolver: R, settings: &Settings) -> Self {
        Self::new(resolver).with_namespace(&settings.admin_namespace)
    }

    /// Overrides the namespace the change views live in.
    #[must_use]
    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespace = namespace.to_string();
        self
    }

    /// Returns the namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl<R: ReverseResolver> AdminLinkBuilder for AdminSite<R> {
    fn build_edit_url(&self, type_name: &str, primary_key: &str) -> UrlResult<String> {
        let view_name = format!("{}:{type_name}_change", self.namespace);
        self.resolver.reverse(&view_name, &[primary_key])
    }
}

/// Returns the admin edit URL of `object`.
///
/// # Examples
///
/// ```
/// use djave_url_core::{UrlError, UrlResult};
/// use djave_url_http::admin::{admin_edit_url, AdminSite, ModelRef};
/// use djave_url_http::routing::ReverseResolver;
///
/// struct Urls;
///
/// impl ReverseResolver for Urls {
///     fn reverse(&self, view_name: &str, args: &[&str]) -> UrlResult<String> {
///         match (view_name, args) {
///             ("admin:maintenance_workorder_change", [pk]) => {
///                 Ok(format!("/admin/maintenance/workorder/{pk}/change/"))
///             }
///             _ => Err(UrlError::NoReverseMatch(view_name.to_string())),
///         }
///     }
/// }
///
/// let site = AdminSite::new(Urls);
/// let order = ModelRef::new("maintenance", "workorder", 17);
/// assert_eq!(
///     admin_edit_url(&site, &order).unwrap(),
///     "/admin/maintenance/workorder/17/change/"
/// );
/// ```
pub fn admin_edit_url<B, M>(builder: &B, object: &M) -> UrlResult<String>
where
    B: AdminLinkBuilder + ?Sized,
    M: ModelMeta + ?Sized,
{
    let type_name = format!("{}_{}", object.app_label(), object.model_name());
    builder.build_edit_url(&type_name, &object.pk())
}
