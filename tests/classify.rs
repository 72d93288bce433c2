use resource_kinds::{Registry, ResourceKind, classify};

#[test]
fn classifies_known_types() {
    let cases = [
        ("aws:acmpca", ResourceKind::Security),
        ("aws:aps", ResourceKind::Observability),
        ("aws:arczonalshift", ResourceKind::Network),
        ("aws:notfound", ResourceKind::NotFound),
        ("aws-native:acmpca", ResourceKind::Security),
        ("unsupported:service", ResourceKind::Unsupported),
        ("azure:appinsights", ResourceKind::Observability),
        ("kubernetes:apps", ResourceKind::Container),
        ("cloud:bucket", ResourceKind::Storage),
        ("oci:ContainerEngine", ResourceKind::Unsupported),
        ("AWS:ACMPCA", ResourceKind::Security),
        ("AZURE:APPINSIGHTS", ResourceKind::Observability),
        ("KUBERNETES:APPS", ResourceKind::Container),
    ];
    for (resource_type, expected) in cases {
        assert_eq!(
            classify(resource_type),
            expected,
            "classifying {resource_type}"
        );
    }
}

#[test]
fn peels_to_service_level_entry() {
    assert_eq!(classify("aws:lambda/function:Function"), ResourceKind::Compute);
    assert_eq!(classify("kubernetes:apps/v1:Deployment"), ResourceKind::Container);
    assert_eq!(classify("aws:s3/bucketV2:BucketV2"), ResourceKind::Storage);
}

#[test]
fn deeper_keys_override_their_service() {
    assert_eq!(classify("azure:appservice/plan:Plan"), ResourceKind::Container);
    assert_eq!(classify("azure:appservice:FunctionApp"), ResourceKind::Compute);
    assert_eq!(classify("azure:appservice:functionApp/slot"), ResourceKind::Compute);
}

#[test]
fn supported_provider_without_entry_is_not_found() {
    assert_eq!(classify("azure:nosuchservice"), ResourceKind::NotFound);
    assert_eq!(classify("kubernetes"), ResourceKind::Unsupported);
    assert_eq!(classify("kubernetes:"), ResourceKind::NotFound);
    assert_eq!(classify("cloud:queue/inbox"), ResourceKind::NotFound);
}

#[test]
fn providers_outside_the_supported_set_are_unsupported() {
    for input in [
        "gcp:storage",
        "gcp:compute",
        "gcp:compute/disk:Disk",
        "GCP:Container/Cluster:Cluster",
        "oci:ContainerEngine",
        "oci:containerengine/cluster:Cluster",
    ] {
        assert_eq!(classify(input), ResourceKind::Unsupported, "classifying {input}");
    }
    let providers: Vec<_> = Registry::embedded().providers().collect();
    assert_eq!(providers, vec!["aws", "azure", "cloud", "kubernetes"]);
}

#[test]
fn malformed_input_is_unsupported() {
    for input in ["", ":", "aws", "aws-native", "awss:lambda", " aws:lambda", "pulumi:providers:aws"] {
        assert_eq!(classify(input), ResourceKind::Unsupported, "classifying {input:?}");
    }
}

#[test]
fn every_registry_key_matches_itself() {
    let registry = Registry::embedded();
    for (key, kind) in registry.entries() {
        assert_eq!(registry.classify(key), kind, "exact key {key}");
        assert_eq!(registry.classify(&key.to_uppercase()), kind, "uppercased key {key}");
    }
}

#[test]
fn unmatched_suffixes_fall_back_to_the_key() {
    let registry = Registry::embedded();
    for (key, kind) in registry.entries() {
        for suffix in [":zzunmatched", "/zzunmatched", "/zz:Unmatched", ":zz/unmatched/deeper"] {
            let input = format!("{key}{suffix}");
            assert_eq!(registry.classify(&input), kind, "classifying {input}");
        }
    }
}

#[test]
fn aws_native_matches_aws() {
    let registry = Registry::embedded();
    for (key, _) in registry.entries() {
        let Some(suffix) = key.strip_prefix("aws:") else {
            continue;
        };
        for tail in [suffix.to_string(), format!("{suffix}/x:X"), suffix.to_uppercase()] {
            assert_eq!(
                registry.classify(&format!("aws-native:{tail}")),
                registry.classify(&format!("aws:{tail}")),
                "alias folding for {tail}"
            );
        }
    }
    assert_eq!(classify("aws-native:nothinghere"), ResourceKind::NotFound);
}

#[test]
fn classification_ignores_case() {
    for input in [
        "aws:ec2/instance:Instance",
        "Azure:Storage/Account:Account",
        "aws-native:s3:Bucket",
        "unsupported:service",
        "gcp:Container/Cluster:Cluster",
    ] {
        let kind = classify(input);
        assert_eq!(classify(&input.to_uppercase()), kind, "upper {input}");
        assert_eq!(classify(&input.to_lowercase()), kind, "lower {input}");
    }
}

#[test]
fn registry_never_yields_sentinels_for_matches() {
    let registry = Registry::embedded();
    for (key, kind) in registry.entries() {
        assert!(!kind.is_sentinel(), "{key} maps to {kind}");
        assert_eq!(key, key.to_lowercase());
    }
}
