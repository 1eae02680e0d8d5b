//! 模拟登录表单
//!
//! 没有真正的认证：提交后按用户类型跳转到对应的落地页，
//! 路径分类器随后把会话推断为个人用户或养老院。

use serde::{Deserialize, Serialize};

use super::SingleTab;
use crate::wizard::{FormDraft, FormSpec, require_text};

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const USER_TYPE: &str = "userType";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Individual,
    CareHome,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Individual => "individual",
            UserType::CareHome => "carehome",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "individual" => Some(UserType::Individual),
            "carehome" => Some(UserType::CareHome),
            _ => None,
        }
    }

    /// 登录成功后的跳转目标
    pub fn landing_path(&self) -> &'static str {
        match self {
            UserType::Individual => "/profile",
            UserType::CareHome => "/care-home",
        }
    }

    /// 从查询串 (`?userType=carehome`) 中读取预选的用户类型
    pub fn from_query(query: &str) -> Option<Self> {
        query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == USER_TYPE)
            .and_then(|(_, v)| Self::parse(v))
    }
}

#[derive(Debug, Clone)]
pub struct LoginForm;

impl LoginForm {
    /// 按查询串预选用户类型的初始草稿
    pub fn draft_for_query(query: &str) -> FormDraft {
        let user_type = UserType::from_query(query).unwrap_or_default();
        Self::initial_draft().with(USER_TYPE, user_type.as_str())
    }

    pub fn user_type(draft: &FormDraft) -> UserType {
        UserType::parse(draft.text(USER_TYPE)).unwrap_or_default()
    }
}

impl FormSpec for LoginForm {
    type Tab = SingleTab;
    const NAME: &'static str = "login";

    fn tabs() -> &'static [SingleTab] {
        &[SingleTab::Main]
    }

    fn tab_label(_tab: SingleTab) -> &'static str {
        "Log In"
    }

    fn initial_draft() -> FormDraft {
        FormDraft::new()
            .with(EMAIL, "")
            .with(PASSWORD, "")
            .with(USER_TYPE, UserType::Individual.as_str())
    }

    fn validate(_tab: SingleTab, draft: &FormDraft) -> crate::error::FormResult<()> {
        require_text(draft, EMAIL, "Email")?;
        require_text(draft, PASSWORD, "Password")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{Role, RouteTables};
    use crate::wizard::{FormWizard, SubmitOutcome};

    #[test]
    fn test_query_preselects_care_home() {
        assert_eq!(UserType::from_query("?userType=carehome"), Some(UserType::CareHome));
        assert_eq!(UserType::from_query("a=1&userType=individual"), Some(UserType::Individual));
        assert_eq!(UserType::from_query("?userType=admin"), None);
        assert_eq!(UserType::from_query(""), None);

        let draft = LoginForm::draft_for_query("?userType=carehome");
        assert_eq!(LoginForm::user_type(&draft), UserType::CareHome);
    }

    #[test]
    fn test_login_requires_credentials() {
        let mut w = FormWizard::<LoginForm>::new();
        w.set_field(EMAIL, "eleanor@example.com");
        assert!(matches!(
            w.submit(|_| {}),
            SubmitOutcome::Rejected(ref e) if e.is_for(PASSWORD)
        ));
    }

    #[test]
    fn test_landing_path_classifies_to_matching_role() {
        let tables = RouteTables::standard();
        assert_eq!(tables.classify(UserType::Individual.landing_path()), Role::Individual);
        assert_eq!(tables.classify(UserType::CareHome.landing_path()), Role::CareHome);
    }
}
