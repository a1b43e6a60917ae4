//! Shared test helpers for configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::GreeterConfig;

/// Pushes `value` onto the composer as the named layer.
pub fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

/// Composes a [`GreeterConfig`] from `(layer_type, value)` pairs.
pub fn build_config_from_layers(layers: &[(&str, Value)]) -> GreeterConfig {
    let mut composer = MergeComposer::new();

    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value.clone());
    }

    GreeterConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}

/// A configuration with every welcome input set.
pub fn complete_config() -> GreeterConfig {
    GreeterConfig {
        token: Some("ghp_example".to_owned()),
        repository: Some("octo/repo".to_owned()),
        api_url: None,
        pr_message: Some("Welcome aboard!".to_owned()),
        pr_label: Some("first-time".to_owned()),
        operations_per_run: Some(100),
    }
}
