//! 为真实服务端测试生成厂商列表。
//!
//! 读取 `src/tests/vendors.toml` 的 `vendors` 数组，生成 `TestVendor` 枚举和 env 变量名常量
//! （`src/tests/lib.rs` 通过 `include!` 使用），并为缺少 env 文件的厂商从 `.env.example` 生成模板。

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const VENDORS_FILE: &str = "src/tests/vendors.toml";
const ENV_DIR: &str = "src/tests/env";

/// 生成代码里用到的 env 变量名
const ENV_VAR_NAMES: &[&str] = &[
    "WEBDAV_SERVER",
    "WEBDAV_BASE_PATH",
    "WEBDAV_PORT",
    "WEBDAV_USERNAME",
    "WEBDAV_PASSWORD",
];

#[derive(Debug, Default, Deserialize)]
struct VendorsFile {
    #[serde(default)]
    vendors: Vec<String>,
}

fn is_valid_vendor_id(id: &str) -> bool {
    !id.is_empty()
        && id.starts_with(|c: char| c.is_ascii_alphabetic())
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn variant_name(id: &str) -> String {
    id.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (head, tail) = part.split_at(1);
            format!("{}{}", head.to_ascii_uppercase(), tail.to_ascii_lowercase())
        })
        .collect()
}

fn read_vendor_ids(manifest_dir: &Path) -> Vec<String> {
    let path = manifest_dir.join(VENDORS_FILE);
    let Ok(content) = fs::read_to_string(&path) else {
        return Vec::new();
    };

    let parsed: VendorsFile = match toml::from_str(&content) {
        Ok(parsed) => parsed,
        Err(e) => {
            println!("cargo:warning={} 解析失败，忽略全部厂商: {e}", path.display());
            return Vec::new();
        }
    };

    parsed
        .vendors
        .into_iter()
        .map(|id| id.trim().to_string())
        .filter(|id| {
            let valid = is_valid_vendor_id(id);
            if !valid {
                println!("cargo:warning=忽略非法厂商 id: {id:?}");
            }
            valid
        })
        .collect()
}

fn render(vendor_ids: &[String]) -> String {
    let mut variants = String::new();
    let mut arms = String::new();
    let mut all = String::new();

    for id in vendor_ids {
        let variant = variant_name(id);
        let _ = writeln!(variants, "    {variant},");
        let _ = writeln!(arms, "            TestVendor::{variant} => \"{id}\",");
        let _ = writeln!(all, "        TestVendor::{variant},");
    }

    // 空枚举无法 match，没有厂商时放一个 id 为空的占位变体
    if vendor_ids.is_empty() {
        variants.push_str("    #[allow(dead_code)]\n    Unconfigured,\n");
        arms.push_str("            TestVendor::Unconfigured => \"\",\n");
        all.push_str("        TestVendor::Unconfigured,\n");
    }

    let mut consts = String::new();
    for name in ENV_VAR_NAMES {
        let _ = writeln!(consts, "    pub const {name}: &str = \"{name}\";");
    }

    format!(
        "// 由 build.rs 根据 {VENDORS_FILE} 生成\n\
         \n\
         #[derive(Debug, Clone, Copy, PartialEq, Eq)]\n\
         pub enum TestVendor {{\n{variants}}}\n\
         \n\
         impl TestVendor {{\n\
         \x20   pub fn as_str(&self) -> &'static str {{\n\
         \x20       match self {{\n{arms}        }}\n\
         \x20   }}\n\
         \n\
         \x20   pub fn all() -> &'static [TestVendor] {{\n\
         \x20       &[\n{all}        ]\n\
         \x20   }}\n\
         }}\n\
         \n\
         #[allow(dead_code)]\n\
         pub mod env_var_names {{\n{consts}}}\n"
    )
}

/// 缺少 `{id}.env` 的厂商从 `.env.example` 复制一份模板
fn seed_env_files(env_dir: &Path, vendor_ids: &[String]) {
    let Ok(template) = fs::read_to_string(env_dir.join(".env.example")) else {
        return;
    };

    for id in vendor_ids {
        let env_file = env_dir.join(format!("{id}.env"));
        if env_file.exists() {
            continue;
        }
        if let Err(e) = fs::write(&env_file, &template) {
            println!("cargo:warning=生成 {} 失败: {e}", env_file.display());
        }
    }
}

fn main() {
    println!("cargo:rerun-if-changed={VENDORS_FILE}");
    println!("cargo:rerun-if-changed={ENV_DIR}");

    let manifest_dir = PathBuf::from(
        env::var("CARGO_MANIFEST_DIR").expect("cargo 未设置 CARGO_MANIFEST_DIR"),
    );
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo 未设置 OUT_DIR"));

    let vendor_ids = read_vendor_ids(&manifest_dir);

    fs::write(out_dir.join("test_vendors.rs"), render(&vendor_ids))
        .expect("写入 test_vendors.rs 失败");

    seed_env_files(&manifest_dir.join(ENV_DIR), &vendor_ids);
}
