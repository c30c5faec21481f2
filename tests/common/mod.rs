#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use portal_rs::templates;

pub const CONTENT: &str = r#"{
  "hero": {"title": "3am Club", "subtitle": {"cn": "加密社区", "en": "Crypto community"}},
  "about": {
    "intro": {"cn": "简介", "en": "Intro"},
    "stats": [{"value": "37k+", "label": {"cn": "推特粉丝", "en": "Twitter Followers"}}],
    "links": {"website": "https://my3am.xyz", "discord": "http://discord.gg/x"}
  },
  "services": [
    {"title": {"cn": "甲", "en": "Alpha"}, "desc": "a"},
    {"title": {"cn": "乙", "en": "Beta"}, "desc": "b"},
    {"title": {"cn": "丙", "en": "Gamma"}, "desc": "c"}
  ],
  "team": [
    {"name": "sanyi", "twitter": "https://x.com/sanyi_eth_", "image": "assets/images/sanyi.jpg",
     "followers": "25.8K+", "desc": {"cn": "大使", "en": "Ambassador"}},
    {"name": "Calman", "twitter": "https://x.com/Calman", "desc": {"cn": "增长", "en": "Growth"}}
  ],
  "cases": [
    {"title": "Galaxy Brain", "desc": {"cn": "案例", "en": "Case"},
     "images": ["c1.jpg", "c2.jpg", "c3.jpg", "c4.jpg", "c5.jpg", "c6.jpg"]}
  ],
  "gallery": [],
  "contact": {"text": {"cn": "联系", "en": "Reach us"}, "email": "my3amclub@gmail.com", "twitter": "@My3amclub"}
}"#;

/// A portal directory with the built-in host page and the given content
pub struct TestSite {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestSite {
    pub fn new(content: Option<&str>) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        fs::write(root.join("index.html"), templates::HOST_PAGE).expect("write host page");
        if let Some(content) = content {
            fs::write(root.join("site_content.json"), content).expect("write content");
        }
        Self { _tmp: tmp, root }
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn write(&self, rel: &str, text: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, text).expect("write file");
    }

    pub fn read(&self, rel: &str) -> String {
        read(&self.path(rel))
    }
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read file")
}
