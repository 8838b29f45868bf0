//! Canonical bucket policy document

use serde_json::json;

/// IAM policy language version
pub const POLICY_VERSION: &str = "2012-10-17";

/// Build the public-read policy for a bucket: anonymous `s3:GetObject` on
/// every object under the bucket.
///
/// The resource ARN is derived from the same bucket name passed to the
/// create call, so the policy can never reference a different bucket.
pub fn public_read_policy(bucket: &str) -> String {
    json!({
        "Version": POLICY_VERSION,
        "Statement": [{
            "Sid": "PublicReadGetObject",
            "Effect": "Allow",
            "Principal": "*",
            "Action": "s3:GetObject",
            "Resource": format!("arn:aws:s3:::{bucket}/*"),
        }]
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_structure() {
        let policy = public_read_policy("my-bucket");
        let doc: serde_json::Value = serde_json::from_str(&policy).unwrap();

        assert_eq!(doc["Version"], "2012-10-17");
        let statement = &doc["Statement"][0];
        assert_eq!(statement["Sid"], "PublicReadGetObject");
        assert_eq!(statement["Effect"], "Allow");
        assert_eq!(statement["Principal"], "*");
        assert_eq!(statement["Action"], "s3:GetObject");
        assert_eq!(statement["Resource"], "arn:aws:s3:::my-bucket/*");
    }

    #[test]
    fn test_resource_tracks_bucket_name() {
        for bucket in ["a", "site-prod", "my.bucket.example"] {
            let policy = public_read_policy(bucket);
            assert!(policy.contains(&format!("arn:aws:s3:::{bucket}/*")));
        }
    }
}
