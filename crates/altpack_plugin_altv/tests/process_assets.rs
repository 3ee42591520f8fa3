use std::sync::Arc;

use altpack_common::{
  BoxedSource, BundlerOptions, Chunk, Compilation, ConcatSource, ExternalOption, Externals,
  OutputFormat, RawSource, Source, SourceMapSource,
};
use altpack_plugin::{PluginDriver, SharedPlugin};
use altpack_plugin_altv::{AltvPlugin, AltvPluginOptions};
use altpack_sourcemap::SourceMap;
use altpack_utils::indexmap::FxIndexMap;

const ALT_IMPORT: &str = "import alt from 'alt';\n";
const NATIVES_IMPORT: &str = "import natives from 'natives';\n";

fn altv() -> SharedPlugin {
  Arc::new(AltvPlugin::new(AltvPluginOptions::default()).unwrap())
}

fn altv_from_json(options: &str) -> SharedPlugin {
  Arc::new(AltvPlugin::from_json(options).unwrap())
}

fn build(
  driver: &PluginDriver,
  mut options: BundlerOptions,
  setup: impl FnOnce(&mut Compilation),
) -> Compilation {
  driver.options(&mut options).unwrap();
  let mut compilation = Compilation::new(Arc::new(options.normalize()));
  setup(&mut compilation);
  driver.process_assets(&mut compilation).unwrap();
  compilation
}

fn content(compilation: &Compilation, file: &str) -> String {
  compilation.assets.get(file).unwrap().content().to_string()
}

fn raw(content: &str) -> BoxedSource {
  Box::new(RawSource::new(content))
}

/// A chunk named after `file`, built from `modules` given as `(id, code)`; `None` code marks an
/// external module. The asset is rendered as `body`.
fn add_chunk(
  compilation: &mut Compilation,
  file: &str,
  modules: &[(&str, Option<&str>)],
  body: &str,
) {
  let modules = modules
    .iter()
    .map(|(id, code)| match code {
      Some(code) => compilation.modules.add_normal(*id, *code),
      None => compilation.modules.add_external(*id),
    })
    .collect();
  let name = file.trim_end_matches(".js");
  compilation.chunks.push(Chunk::new(name, modules).with_file(file));
  compilation.assets.insert(file, raw(body));
}

fn client_build(compilation: &mut Compilation) {
  add_chunk(
    compilation,
    "client.js",
    &[("./foo.js", Some("export const foo = 1;\n")), ("alt-client", None)],
    "const foo = 1;\nalt.log(foo);\n",
  );
}

#[test]
fn registers_alt_runtimes_on_empty_externals() {
  let driver = PluginDriver::new(vec![altv_from_json(
    r#"{ "bindings": [
      { "module": "alt", "identifier": "alt" },
      { "module": "alt-client", "identifier": "alt" },
      { "module": "alt-server", "identifier": "alt" }
    ] }"#,
  )]);

  let mut options = BundlerOptions::default();
  driver.options(&mut options).unwrap();

  let expected: FxIndexMap<String, String> =
    [("alt", "alt"), ("alt-client", "alt"), ("alt-server", "alt")]
      .into_iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
  assert_eq!(options.externals, Some(Externals::List(vec![ExternalOption::Map(expected)])));
}

#[test]
fn appends_to_single_user_external() {
  let driver = PluginDriver::new(vec![altv()]);
  let lodash: FxIndexMap<String, String> =
    std::iter::once(("lodash".to_string(), "lodash".to_string())).collect();

  let mut options = BundlerOptions {
    externals: Some(Externals::Single(ExternalOption::Map(lodash.clone()))),
    ..Default::default()
  };
  driver.options(&mut options).unwrap();

  let externals = options.externals.unwrap().into_vec();
  assert_eq!(externals.len(), 2);
  assert_eq!(externals[0], ExternalOption::Map(lodash));
  for name in ["natives", "alt", "alt-client", "alt-server"] {
    assert!(externals[1].reference_for(name).is_some(), "{name}");
  }
}

#[test]
fn injects_alt_import_into_client_chunk() {
  let driver = PluginDriver::new(vec![altv()]);
  let compilation = build(&driver, BundlerOptions::default(), client_build);

  assert_eq!(
    content(&compilation, "client.js"),
    format!("{ALT_IMPORT}const foo = 1;\nalt.log(foo);\n")
  );
  assert!(compilation.warnings.is_empty());
}

#[test]
fn injects_one_line_per_identifier_in_table_order() {
  let driver = PluginDriver::new(vec![altv()]);
  let compilation = build(&driver, BundlerOptions::default(), |compilation| {
    add_chunk(
      compilation,
      "shared.js",
      &[("alt-server", None), ("./main.js", Some("main();\n")), ("natives", None)],
      "main();\n",
    );
  });

  assert_eq!(content(&compilation, "shared.js"), format!("{NATIVES_IMPORT}{ALT_IMPORT}main();\n"));
}

#[test]
fn aliases_collapse_into_one_import() {
  let driver = PluginDriver::new(vec![altv()]);
  let compilation = build(&driver, BundlerOptions::default(), |compilation| {
    add_chunk(compilation, "both.js", &[("alt-client", None), ("alt-server", None)], "run();\n");
  });

  assert_eq!(content(&compilation, "both.js"), format!("{ALT_IMPORT}run();\n"));
}

#[test]
fn identity_detection_ignores_lookalike_strings() {
  let driver = PluginDriver::new(vec![altv()]);
  let body = "const mode = \"alternate\";\nconst label = \"alt\";\n";
  let compilation = build(&driver, BundlerOptions::default(), |compilation| {
    add_chunk(
      compilation,
      "util.js",
      &[("./util.js", Some("export const mode = \"alternate\";\nexport const label = \"alt\";\n"))],
      body,
    );
  });

  assert_eq!(content(&compilation, "util.js"), body);
  assert!(compilation.import_headers.is_empty());
}

#[test]
fn source_scan_reports_quoted_names_in_plain_strings() {
  let driver = PluginDriver::new(vec![altv_from_json(r#"{ "detection": "source-scan" }"#)]);
  let compilation = build(&driver, BundlerOptions::default(), |compilation| {
    add_chunk(
      compilation,
      "util.js",
      &[("./util.js", Some("export const label = \"alt\";\n"))],
      "const label = \"alt\";\n",
    );
  });

  // Known false positive of scanning sources: the import is unused but harmless.
  assert_eq!(content(&compilation, "util.js"), format!("{ALT_IMPORT}const label = \"alt\";\n"));
}

#[test]
fn source_scan_over_asset_children() {
  let driver = PluginDriver::new(vec![altv()]);
  let compilation = build(&driver, BundlerOptions::default(), |compilation| {
    let children = vec![
      raw("/******/ (() => {\n"),
      raw("/***/ \"natives\":\n/***/ ((module) => {\nmodule.exports = natives;\n/***/ }),\n"),
      raw("/***/ \"./src/index.js\":\n/***/ (() => {\nconsole.log(\"alternate\");\n/***/ })\n"),
      raw("/******/ })();\n"),
    ];
    compilation.assets.insert("main.js", Box::new(ConcatSource::new(children)));
    compilation.assets.insert("vendor.js", raw("console.log(\"alternate\");\n"));
  });

  let main = content(&compilation, "main.js");
  assert!(main.starts_with(&format!("{NATIVES_IMPORT}/******/ (() => {{\n")), "{main}");
  assert!(!main.contains(ALT_IMPORT));
  assert_eq!(content(&compilation, "vendor.js"), "console.log(\"alternate\");\n");
}

#[test]
fn forced_identity_without_module_ids_falls_back() {
  let driver = PluginDriver::new(vec![altv_from_json(r#"{ "detection": "identity" }"#)]);
  let compilation = build(&driver, BundlerOptions::default(), |compilation| {
    compilation.assets.insert("main.js", raw("require(\"alt-server\");\n"));
  });

  assert_eq!(content(&compilation, "main.js"), format!("{ALT_IMPORT}require(\"alt-server\");\n"));
  assert_eq!(compilation.warnings.len(), 1);
}

#[test]
fn unrelated_units_are_left_alone() {
  let driver = PluginDriver::new(vec![altv()]);
  let compilation = build(&driver, BundlerOptions::default(), |compilation| {
    client_build(compilation);
    add_chunk(compilation, "other.js", &[("./other.js", Some("other();\n"))], "other();\n");
  });

  assert_eq!(content(&compilation, "other.js"), "other();\n");
  assert!(!compilation.import_headers.contains_key("other.js"));
}

#[test]
fn original_source_is_kept_as_suffix() {
  let driver = PluginDriver::new(vec![altv()]);
  let body = "\"use strict\";\r\n// import alt from 'alt';\nalt.emit('ready')";
  let compilation = build(&driver, BundlerOptions::default(), |compilation| {
    add_chunk(compilation, "server.js", &[("natives", None), ("alt", None)], body);
  });

  let content = content(&compilation, "server.js");
  let headers = format!("{NATIVES_IMPORT}{ALT_IMPORT}");
  assert_eq!(&content[..headers.len()], headers);
  assert_eq!(&content[headers.len()..], body);
}

#[test]
fn output_is_deterministic() {
  let driver = PluginDriver::new(vec![altv()]);
  let setup = |compilation: &mut Compilation| {
    client_build(compilation);
    add_chunk(compilation, "server.js", &[("alt-server", None), ("natives", None)], "s();\n");
    add_chunk(compilation, "util.js", &[("./util.js", Some("u();\n"))], "u();\n");
  };

  let first = build(&driver, BundlerOptions::default(), setup);
  let second = build(&driver, BundlerOptions::default(), setup);

  let render = |compilation: &Compilation| {
    compilation
      .assets
      .iter()
      .map(|(name, source)| format!("{name}\n{}", source.content()))
      .collect::<Vec<_>>()
  };
  assert_eq!(render(&first), render(&second));
}

#[test]
fn shared_file_is_injected_once_in_table_order() {
  let driver = PluginDriver::new(vec![altv()]);
  let compilation = build(&driver, BundlerOptions::default(), |compilation| {
    let alt = compilation.modules.add_external("alt-client");
    let natives = compilation.modules.add_external("natives");
    compilation.chunks.push(Chunk::new("a", vec![alt]).with_file("bundle.js"));
    compilation.chunks.push(Chunk::new("b", vec![natives, alt]).with_file("bundle.js"));
    compilation.assets.insert("bundle.js", raw("bundle();\n"));
  });

  assert_eq!(
    content(&compilation, "bundle.js"),
    format!("{NATIVES_IMPORT}{ALT_IMPORT}bundle();\n")
  );
}

#[test]
fn two_plugin_instances_do_not_double_inject() {
  let driver = PluginDriver::new(vec![altv(), altv()]);
  let mut options = BundlerOptions::default();
  let compilation = {
    driver.options(&mut options).unwrap();
    let mut compilation = Compilation::new(Arc::new(options.clone().normalize()));
    client_build(&mut compilation);
    driver.process_assets(&mut compilation).unwrap();
    compilation
  };

  assert_eq!(options.externals.map(Externals::into_vec).map(|list| list.len()), Some(1));
  assert_eq!(
    content(&compilation, "client.js"),
    format!("{ALT_IMPORT}const foo = 1;\nalt.log(foo);\n")
  );
}

#[test]
fn missing_chunk_file_is_skipped() {
  let driver = PluginDriver::new(vec![altv()]);
  let compilation = build(&driver, BundlerOptions::default(), |compilation| {
    let alt = compilation.modules.add_external("alt");
    compilation
      .chunks
      .push(Chunk::new("main", vec![alt]).with_file("main.js").with_file("main.legacy.js"));
    compilation.assets.insert("main.js", raw("main();\n"));
  });

  assert_eq!(content(&compilation, "main.js"), format!("{ALT_IMPORT}main();\n"));
  assert!(!compilation.assets.contains("main.legacy.js"));
  assert!(!compilation.import_headers.contains_key("main.legacy.js"));
}

#[test]
fn chunk_source_map_is_not_prefixed() {
  let driver = PluginDriver::new(vec![altv()]);
  let sourcemap = r#"{"version":3,"sources":[],"names":[],"mappings":""}"#;
  let compilation = build(&driver, BundlerOptions::default(), |compilation| {
    let alt = compilation.modules.add_external("alt");
    compilation
      .chunks
      .push(Chunk::new("main", vec![alt]).with_file("main.js").with_file("main.js.map"));
    compilation.assets.insert("main.js", raw("main();\n"));
    compilation.assets.insert("main.js.map", raw(sourcemap));
  });

  assert_eq!(content(&compilation, "main.js"), format!("{ALT_IMPORT}main();\n"));
  assert_eq!(content(&compilation, "main.js.map"), sourcemap);
}

#[test]
fn non_esm_output_is_left_alone() {
  let driver = PluginDriver::new(vec![altv()]);
  let options = BundlerOptions { format: Some(OutputFormat::Cjs), ..Default::default() };
  let compilation = build(&driver, options, client_build);

  assert_eq!(content(&compilation, "client.js"), "const foo = 1;\nalt.log(foo);\n");
  assert_eq!(compilation.warnings.len(), 1);
  assert!(compilation.warnings[0].to_string().contains("`cjs`"));
}

#[test]
fn source_map_moves_below_headers() {
  let driver = PluginDriver::new(vec![altv()]);
  let compilation = build(&driver, BundlerOptions::default(), |compilation| {
    let sourcemap = SourceMap::from_json_string(
      r#"{"version":3,"sources":["src/index.js"],"names":[],"mappings":"AAAA;AACA"}"#,
    )
    .unwrap();
    let alt = compilation.modules.add_external("alt-client");
    let natives = compilation.modules.add_external("natives");
    compilation.chunks.push(Chunk::new("index", vec![alt, natives]).with_file("index.js"));
    compilation.assets.insert(
      "index.js",
      Box::new(SourceMapSource::new("a();\nb();\n".to_string(), sourcemap)),
    );
  });

  let asset = compilation.assets.get("index.js").unwrap();
  let lines: Vec<u32> =
    asset.sourcemap().unwrap().get_tokens().map(|token| token.get_dst_line()).collect();
  assert_eq!(lines, vec![2, 3]);
}

#[test]
fn invalid_options_are_rejected() {
  assert!(AltvPlugin::from_json(r#"{ "detection": 1 }"#).is_err());
  assert!(AltvPlugin::from_json("[]").is_err());
  assert!(AltvPlugin::from_json("null").is_err());
  assert!(AltvPlugin::from_json(r#""source-scan""#).is_err());
}

#[test]
fn bindings_that_break_the_import_line_are_rejected() {
  let err = AltvPlugin::from_json(
    r#"{ "bindings": [{ "module": "alt", "identifier": "alt-client", "source": "alt" }] }"#,
  )
  .unwrap_err();
  assert!(format!("{err:#}").contains("not a valid identifier"), "{err:#}");

  let err = AltvPlugin::from_json(
    r#"{ "bindings": [{ "module": "alt", "identifier": "alt", "source": "it's" }] }"#,
  )
  .unwrap_err();
  assert!(format!("{err:#}").contains("\"it's\""), "{err:#}");
}
