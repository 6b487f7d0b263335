//! OAuth scopes understood by the gateway's authorization server.

use crate::enums::{string_enum, StringEnum};

string_enum! {
    /// A permission requested when exchanging OAuth client credentials for an access token.
    ///
    /// Variants mirror the scope strings they serialize to.
    #[allow(missing_docs)]
    pub enum OAuthScope {
        Vault => "vault",
        VaultInstruments => "vault:instruments",
        VaultTokenization => "vault:tokenization",
        Gateway => "gateway",
        GatewayPayment => "gateway:payment",
        GatewayPaymentDetails => "gateway:payment-details",
        GatewayPaymentAuthorization => "gateway:payment-authorizations",
        GatewayPaymentVoids => "gateway:payment-voids",
        GatewayPaymentCaptures => "gateway:payment-captures",
        GatewayPaymentRefunds => "gateway:payment-refunds",
        Fx => "fx",
        PayoutsBankDetails => "payouts:bank-details",
        SessionsApp => "sessions:app",
        SessionsBrowser => "sessions:browser",
        Disputes => "disputes",
        DisputesView => "disputes:view",
        DisputesProvideEvidence => "disputes:provide-evidence",
        DisputesAccept => "disputes:accept",
        Marketplace => "marketplace",
        Accounts => "accounts",
        Flow => "flow",
        FlowWorkflows => "flow:workflows",
        FlowEvents => "flow:events",
        Files => "files",
        FilesRetrieve => "files:retrieve",
        FilesUpload => "files:upload",
        FilesDownload => "files:download",
        Transfers => "transfers",
        TransfersCreate => "transfers:create",
        TransfersView => "transfers:view",
        Balances => "balances",
        BalancesView => "balances:view",
        Middleware => "middleware",
        MiddlewareMerchantsSecret => "middleware:merchants-secret",
        MiddlewareMerchantsPublic => "middleware:merchants-public",
    }
}

impl OAuthScope {
    /// The top-level scope this one belongs to, e.g. `gateway` for `gateway:payment`.
    pub fn parent(&self) -> Option<OAuthScope> {
        let (parent, _) = self.value().split_once(':')?;
        OAuthScope::from_value(parent)
    }
}

/// Joins scopes into the space separated `scope` parameter of a token request.
///
/// # Examples
///
/// ```
/// use checkout_sdk::oauth_scopes::{join_scopes, OAuthScope};
///
/// let scope = join_scopes(&[OAuthScope::Gateway, OAuthScope::Vault]);
/// assert_eq!(scope, "gateway vault");
/// ```
pub fn join_scopes(scopes: &[OAuthScope]) -> String {
    scopes
        .iter()
        .map(|scope| scope.value())
        .collect::<Vec<_>>()
        .join(" ")
}
