//! Application constants
//!
//! Default selectors, endpoints and cookie names shared by the settings page
//! controller and the sign-in callback. Most of these can be overridden at
//! runtime through [`crate::config::Config`].

/// DOM selectors rendered by the server-side settings templates
pub mod selectors {
    /// Every button that opens the add-collaborator dialog
    pub const COLLABORATOR_TRIGGERS: &str =
        ".create-new-token-btn, .create-new-token-mobile-btn, .add_collaborators_btn";

    pub const COLLABORATORS_MODAL: &str = "#new_collaborator_modal";

    /// Every button that opens the transfer-ownership dialog
    pub const OWNER_TRIGGERS: &str = ".ownership_btn, .transfer";

    pub const OWNER_MODAL: &str = "#transfer_owner_modal";

    /// Scoped to a modal
    pub const MODAL_INPUT: &str = "input";
    /// Scoped to a modal
    pub const MODAL_SUBMIT: &str = ".submit";
    /// Scoped to a modal
    pub const MODAL_CANCEL: &str = ".cancel";

    /// Hidden list item cloned for every freshly created token
    pub const TOKEN_ITEM_TEMPLATE: &str = ".token-item-template .token-item";

    pub const TOKENS_LIST: &str = ".tokens-list";

    /// Empty-state placeholder shown while the user has no tokens
    pub const NO_TOKENS: &str = ".no-tokens";

    pub const TOKENS_ERROR: &str = ".tokens-error";

    /// Scoped to a token item
    pub const TOKEN_ITEM: &str = ".token-item";
    /// Scoped to a token item
    pub const TOKEN_NAME: &str = ".token-name";
    /// Scoped to a token item
    pub const TOKEN_PLAINTEXT: &str = ".token-plaintext";
    /// Scoped to a token item
    pub const REVOKE_TOKEN: &str = ".revoke-token";

    pub const TOKEN_CREATED_AT: &str = ".token-created-at";

    pub const USER_EMAIL: &str = "#user_email";

    pub const ADD_COLLABORATORS_BUTTON: &str = ".add_collaborators_btn";
}

/// Server endpoints
pub mod endpoints {
    /// `PUT` creates a token, `DELETE {TOKENS}/{id}` revokes one
    pub const TOKENS: &str = "/api/v1/tokens";

    /// Target of the post sign-in redirect
    pub const GOOGLE_CALLBACK: &str = "/accounts/google/callback";
}

/// Cookie names and attributes
pub mod cookies {
    /// Set by the server on logout so the next page load also ends the
    /// identity provider session
    pub const SIGN_OUT: &str = "sign_out";

    pub const EXPIRED: &str = "Thu, 01 Jan 1970 00:00:01 GMT";
}

/// Inline style applied by the page controller
pub mod style {
    /// Background for the add-collaborators button once an email was entered
    pub const HIGHLIGHT_BACKGROUND: &str = "var(--blue-color)";
}

/// Runtime configuration lookup
pub mod config {
    /// Id of the optional `<script type="application/json">` config block
    pub const ELEMENT_ID: &str = "registry-web-config";

    /// URL query key for debug categories (`?rwdebug=tokens,signin`)
    pub const DEBUG_QUERY_KEY: &str = "rwdebug";

    /// localStorage key for debug categories
    pub const DEBUG_STORAGE_KEY: &str = "registry.debug";
}
