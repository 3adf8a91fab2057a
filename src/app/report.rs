use crate::core::LegoSet;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 每行一筆
    #[default]
    Text,
    /// 每個查詢一行 JSON (JSON Lines)
    Json,
}

/// 查詢結果的輸出通道
pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// 標題只出現在文字模式
    pub fn heading(&mut self, text: &str) -> Result<()> {
        if self.format == OutputFormat::Text {
            writeln!(self.out, "{}", text)?;
        }
        Ok(())
    }

    pub fn count(&mut self, query: &str, count: usize) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", count)?,
            OutputFormat::Json => self.json_line(&serde_json::json!({
                "query": query,
                "count": count,
            }))?,
        }
        Ok(())
    }

    pub fn total(&mut self, query: &str, total: u64) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", total)?,
            OutputFormat::Json => self.json_line(&serde_json::json!({
                "query": query,
                "total": total,
            }))?,
        }
        Ok(())
    }

    pub fn name(&mut self, query: &str, name: &str) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", name)?,
            OutputFormat::Json => self.json_line(&serde_json::json!({
                "query": query,
                "name": name,
            }))?,
        }
        Ok(())
    }

    pub fn names<'a, I>(&mut self, query: &str, names: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self.format {
            OutputFormat::Text => {
                for name in names {
                    writeln!(self.out, "{}", name)?;
                }
            }
            OutputFormat::Json => {
                let names: Vec<&str> = names.into_iter().collect();
                self.json_line(&serde_json::json!({
                    "query": query,
                    "names": names,
                }))?
            }
        }
        Ok(())
    }

    pub fn sets<'a, I>(&mut self, query: &str, sets: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a LegoSet>,
    {
        match self.format {
            OutputFormat::Text => {
                for set in sets {
                    writeln!(self.out, "{}", set)?;
                }
            }
            OutputFormat::Json => {
                let sets: Vec<&LegoSet> = sets.into_iter().collect();
                self.json_line(&serde_json::json!({
                    "query": query,
                    "sets": sets,
                }))?
            }
        }
        Ok(())
    }

    pub fn themes(&mut self, query: &str, themes: &BTreeMap<&str, usize>) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                for (theme, count) in themes {
                    writeln!(self.out, "{}: {}", theme, count)?;
                }
            }
            OutputFormat::Json => self.json_line(&serde_json::json!({
                "query": query,
                "themes": themes,
            }))?,
        }
        Ok(())
    }

    fn json_line(&mut self, value: &serde_json::Value) -> Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }
}
