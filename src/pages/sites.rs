//! Sites: event-collection surfaces with their secret key
//!
//! The full key is shown once, right after creation; the list only shows a
//! prefix.

use std::sync::Arc;

use super::{PageTask, present, require, task, toast_failure};
use crate::client::SiteClient;
use crate::context::AppContext;
use crate::models::{CreateSiteParams, Site};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteForm {
    pub name: String,
    pub domain: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SiteModal {
    Create,
    Created(Site),
}

pub struct SitesPage {
    ctx: Arc<AppContext>,
    sites: Arc<SiteClient>,
    pub form: SiteForm,
    modal: Option<SiteModal>,
}

impl SitesPage {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        let sites = Arc::new(SiteClient::new(ctx.rpc()));
        Self {
            ctx,
            sites,
            form: SiteForm::default(),
            modal: None,
        }
    }

    pub fn load(&self) -> PageTask {
        let sites = self.sites.clone();
        task(async move { sites.fetch().await })
    }

    pub fn sites(&self) -> Vec<Site> {
        self.sites.items()
    }

    pub fn is_loading(&self) -> bool {
        self.sites.is_loading()
    }

    pub fn modal(&self) -> Option<&SiteModal> {
        self.modal.as_ref()
    }

    /// Site just created, while its key is on display
    pub fn created_site(&self) -> Option<&Site> {
        match &self.modal {
            Some(SiteModal::Created(site)) => Some(site),
            _ => None,
        }
    }

    pub fn open_create(&mut self) {
        self.modal = Some(SiteModal::Create);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn is_creating(&self) -> bool {
        self.sites.is_creating()
    }

    pub async fn submit_create(&mut self) -> bool {
        if !require(
            &self.ctx,
            &[
                ("Name", present(&self.form.name)),
                ("Domain", present(&self.form.domain)),
            ],
        ) {
            return false;
        }

        let params = CreateSiteParams {
            name: self.form.name.trim().to_string(),
            domain: self.form.domain.trim().to_string(),
        };
        match self.sites.create(&params).await {
            Ok(site) => {
                self.ctx.toasts().success("Site created");
                self.modal = Some(SiteModal::Created(site));
                self.form = SiteForm::default();
                self.sites.fetch().await;
                true
            }
            Err(e) => {
                toast_failure(&self.ctx, &e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::signed_in;
    use crate::rpc::methods;
    use crate::rpc::mock::MockReply;
    use serde_json::json;

    fn site_json() -> serde_json::Value {
        json!({ "id": "s1", "name": "Blog", "domain": "blog.example.com",
                "site_key": "sk_live_0123456789abcdef", "status": "active" })
    }

    #[tokio::test]
    async fn test_create_shows_key_once() {
        let (ctx, mock) = signed_in();
        mock.on(methods::SITE_CREATE, MockReply::ok(site_json()));
        mock.on(methods::SITE_LIST, MockReply::ok(json!([site_json()])));

        let mut page = SitesPage::new(ctx);
        page.open_create();
        page.form.name = "Blog".into();
        page.form.domain = "blog.example.com".into();

        assert!(page.submit_create().await);
        assert_eq!(
            page.created_site().map(|s| s.site_key.as_str()),
            Some("sk_live_0123456789abcdef")
        );
        assert_eq!(page.form, SiteForm::default());
        assert_eq!(page.sites().len(), 1);

        page.close_modal();
        assert!(page.created_site().is_none());
    }

    #[tokio::test]
    async fn test_domain_required() {
        let (ctx, mock) = signed_in();
        let mut page = SitesPage::new(ctx.clone());
        page.open_create();
        page.form.name = "Blog".into();

        assert!(!page.submit_create().await);
        assert_eq!(mock.call_count(methods::SITE_CREATE), 0);
        assert_eq!(page.modal(), Some(&SiteModal::Create));
        assert_eq!(ctx.toasts().latest().unwrap().message, "Domain is required");
    }
}
