use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::error;

type HmacSha256 = Hmac<Sha256>;

/// Requests older (or further in the future) than this are treated as replays.
const MAX_CLOCK_SKEW_SECS: u64 = 60 * 5;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Verify `X-Slack-Signature` against the signing secret.
///
/// The signature is `v0=` followed by the hex HMAC-SHA256 of `v0:{timestamp}:{body}`.
#[must_use]
pub fn verify_slack_signature(
    request_body: &str,
    timestamp: &str,
    signature: &str,
    signing_secret: &str,
) -> bool {
    verify_slack_signature_at(request_body, timestamp, signature, signing_secret, now_secs())
}

fn verify_slack_signature_at(
    request_body: &str,
    timestamp: &str,
    signature: &str,
    signing_secret: &str,
    now: u64,
) -> bool {
    let Ok(ts) = timestamp.parse::<u64>() else {
        error!("Invalid request timestamp: {}", timestamp);
        return false;
    };
    if now.abs_diff(ts) > MAX_CLOCK_SKEW_SECS {
        error!("Timestamp out of range, potential replay attack");
        return false;
    }

    let Some(expected) = signature
        .strip_prefix("v0=")
        .and_then(|hex_sig| hex::decode(hex_sig).ok())
    else {
        error!("Malformed Slack signature header");
        return false;
    };

    let mut mac = match HmacSha256::new_from_slice(signing_secret.as_bytes()) {
        Ok(mac) => mac,
        Err(e) => {
            error!("Failed to create HMAC: {}", e);
            return false;
        }
    };
    mac.update(format!("v0:{timestamp}:{request_body}").as_bytes());

    if mac.verify_slice(&expected).is_ok() {
        true
    } else {
        error!("Slack signature verification failed");
        false
    }
}

/// Compute the `X-Slack-Signature` value Slack would send for this request.
#[must_use]
pub fn compute_signature(timestamp: &str, request_body: &str, signing_secret: &str) -> String {
    let base_string = format!("v0:{timestamp}:{request_body}");
    let mut mac = match HmacSha256::new_from_slice(signing_secret.as_bytes()) {
        Ok(mac) => mac,
        Err(e) => {
            error!("Failed to create HMAC: {}", e);
            return String::new();
        }
    };
    mac.update(base_string.as_bytes());
    format!("v0={}", hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "8f742231b10e8888abcd99yyyzzz85a5";
    const BODY: &str = "token=xyz&command=%2Fopen-modal&trigger_id=1.2";

    #[test]
    fn accepts_a_fresh_valid_signature() {
        let ts = "1700000000";
        let sig = compute_signature(ts, BODY, SECRET);
        assert!(verify_slack_signature_at(BODY, ts, &sig, SECRET, 1_700_000_010));
    }

    #[test]
    fn rejects_a_tampered_body() {
        let ts = "1700000000";
        let sig = compute_signature(ts, BODY, SECRET);
        assert!(!verify_slack_signature_at(
            "token=xyz&command=%2Fother",
            ts,
            &sig,
            SECRET,
            1_700_000_000
        ));
    }

    #[test]
    fn rejects_stale_and_future_timestamps() {
        let ts = "1700000000";
        let sig = compute_signature(ts, BODY, SECRET);
        assert!(!verify_slack_signature_at(BODY, ts, &sig, SECRET, 1_700_000_301));
        assert!(!verify_slack_signature_at(BODY, ts, &sig, SECRET, 1_699_999_000));
    }

    #[test]
    fn rejects_malformed_input() {
        let ts = "1700000000";
        assert!(!verify_slack_signature_at(BODY, ts, "deadbeef", SECRET, 1_700_000_000));
        assert!(!verify_slack_signature_at(BODY, ts, "v0=zz", SECRET, 1_700_000_000));
        let sig = compute_signature(ts, BODY, SECRET);
        assert!(!verify_slack_signature_at(BODY, "yesterday", &sig, SECRET, 1_700_000_000));
    }

    #[test]
    fn verify_uses_the_wall_clock() {
        let ts = now_secs().to_string();
        let sig = compute_signature(&ts, BODY, SECRET);
        assert!(verify_slack_signature(BODY, &ts, &sig, SECRET));
    }
}
