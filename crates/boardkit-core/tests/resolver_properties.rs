//! Behavioural properties of the integration catalog resolver.

use boardkit_core::{
    AccountId, Credential, CredentialType, ToolServer, ToolServerStatus, resolve_available,
};

fn credential(id: &str, credential_type: CredentialType) -> Credential {
    Credential {
        id: id.to_string(),
        board_id: "board-1".to_string(),
        credential_type,
        name: id.to_string(),
        metadata: serde_json::Map::new(),
        created_at: None,
    }
}

fn server(id: &str, name: &str) -> ToolServer {
    ToolServer {
        id: id.to_string(),
        board_id: "board-1".to_string(),
        name: name.to_string(),
        status: ToolServerStatus::Connected,
        credential_id: None,
    }
}

fn tool_names(credentials: &[Credential], servers: &[ToolServer]) -> Vec<&'static str> {
    resolve_available(credentials, servers)
        .available_account_tools
        .iter()
        .map(|tool| tool.name)
        .collect()
}

#[test]
fn test_resolution_is_pure_and_order_stable() {
    let credentials = vec![
        credential("g", CredentialType::GoogleOauth),
        credential("k", CredentialType::AnthropicApiKey),
    ];
    let servers = vec![server("s1", "Linear"), server("s2", "Google Docs")];

    let first = resolve_available(&credentials, &servers);
    let second = resolve_available(&credentials, &servers);
    assert_eq!(first, second);

    // Input order must not affect output order.
    let reversed_credentials: Vec<_> = credentials.iter().rev().cloned().collect();
    let reversed_servers: Vec<_> = servers.iter().rev().cloned().collect();
    assert_eq!(first, resolve_available(&reversed_credentials, &reversed_servers));
}

#[test]
fn test_google_connection_offers_all_google_tools() {
    let credentials = [credential("g", CredentialType::GoogleOauth)];
    assert_eq!(
        tool_names(&credentials, &[]),
        ["Gmail", "Google Docs", "Google Sheets"]
    );
}

#[test]
fn test_installing_gmail_removes_exactly_gmail() {
    let credentials = [credential("g", CredentialType::GoogleOauth)];
    let servers = [server("s1", "Gmail")];
    assert_eq!(
        tool_names(&credentials, &servers),
        ["Google Docs", "Google Sheets"]
    );
}

#[test]
fn test_github_stays_unconnected_without_credential_regardless_of_servers() {
    let cases: Vec<Vec<ToolServer>> = vec![
        vec![],
        vec![server("s1", "GitHub")],
        vec![server("s1", "github"), server("s2", "Gmail")],
    ];
    let credentials = [credential("g", CredentialType::GoogleOauth)];

    for servers in cases {
        let result = resolve_available(&credentials, &servers);
        let github: Vec<_> = result
            .unconnected_accounts
            .iter()
            .filter(|account| account.account_id == AccountId::Github)
            .collect();
        assert_eq!(github.len(), 1);
        assert_eq!(result.unconnected_accounts.len(), 1);
    }
}

#[test]
fn test_duplicate_oauth_credentials_do_not_duplicate_offers() {
    let credentials = [
        credential("g1", CredentialType::GoogleOauth),
        credential("g2", CredentialType::GoogleOauth),
    ];
    assert_eq!(tool_names(&credentials, &[]).len(), 3);
}

#[test]
fn test_unknown_credential_types_are_ignored() {
    let credentials = [credential("x", CredentialType::from("slack_oauth"))];
    let result = resolve_available(&credentials, &[]);
    assert_eq!(result.unconnected_accounts.len(), 2);
    assert!(result.available_account_tools.is_empty());
}
