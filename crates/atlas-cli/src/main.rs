// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Interactive console front-end for the Atlas asset catalogue.
//!
//! A thin caller: it parses menu choices from stdin and translates them into
//! [`AssetCatalog`] calls. All catalogue state and invariants live in
//! `atlas-data`; nothing here holds records or index entries of its own.

use anyhow::Result;
use atlas_core::{AssetId, AssetMetadata, AssetType};
use atlas_data::AssetCatalog;
use std::io::{self, BufRead, Write};

const MENU: &str = "\
Atlas Asset Catalogue
1. Add asset
2. List assets by type
3. List assets by keyword
4. Remove asset
5. Show related assets
6. Link two assets
7. Dump catalogue as JSON
8. Exit";

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut catalog = AssetCatalog::new();

    loop {
        println!("{MENU}");
        let Some(choice) = prompt(&mut input, "> ")? else {
            // EOF on stdin ends the session like an explicit exit.
            break;
        };

        match choice.as_str() {
            "1" => add_asset(&mut input, &mut catalog)?,
            "2" => list_by_type(&mut input, &catalog)?,
            "3" => list_by_keyword(&mut input, &catalog)?,
            "4" => remove_asset(&mut input, &mut catalog)?,
            "5" => show_related(&mut input, &catalog)?,
            "6" => link_assets(&mut input, &mut catalog)?,
            "7" => dump_catalog(&catalog)?,
            "8" => break,
            other => println!("Unknown choice '{other}'"),
        }
    }

    log::debug!("session ended with {} assets catalogued", catalog.len());
    Ok(())
}

/// Prints `message`, reads one trimmed line. `None` means EOF.
fn prompt(input: &mut impl BufRead, message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Parses a type from user input, accepting both the numeric menu shorthand
/// and the type name.
fn parse_asset_type(raw: &str) -> Result<AssetType> {
    match raw.trim() {
        "0" => Ok(AssetType::Texture),
        "1" => Ok(AssetType::Audio),
        "2" => Ok(AssetType::Model),
        name => Ok(name.parse()?),
    }
}

fn print_assets(catalog: &AssetCatalog, ids: &[AssetId]) {
    for id in ids {
        if let Some(record) = catalog.get(*id) {
            let meta = record.metadata();
            println!("{} - {}", meta.name, meta.path);
        }
    }
}

fn add_asset(input: &mut impl BufRead, catalog: &mut AssetCatalog) -> Result<()> {
    let Some(name) = prompt(input, "Enter asset name: ")? else {
        return Ok(());
    };
    let Some(path) = prompt(input, "Enter asset path: ")? else {
        return Ok(());
    };
    let Some(raw_type) = prompt(input, "Enter asset type (0 - texture, 1 - audio, 2 - model): ")?
    else {
        return Ok(());
    };
    let asset_type = match parse_asset_type(&raw_type) {
        Ok(ty) => ty,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };
    let Some(raw_keywords) = prompt(input, "Enter keywords (comma separated): ")? else {
        return Ok(());
    };
    let keywords: Vec<String> = raw_keywords
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_owned)
        .collect();
    let Some(category) = prompt(input, "Enter asset category: ")? else {
        return Ok(());
    };
    let Some(raw_version) = prompt(input, "Enter asset version: ")? else {
        return Ok(());
    };
    let version = raw_version.parse().unwrap_or(1);

    if catalog.find_by_name(&name).is_some() {
        log::warn!("an asset named '{name}' already exists; adding another");
    }
    let id = catalog.insert(AssetMetadata::new(
        name, path, asset_type, keywords, category, version,
    ));
    println!("Added asset {id:?}");
    Ok(())
}

fn list_by_type(input: &mut impl BufRead, catalog: &AssetCatalog) -> Result<()> {
    let Some(raw_type) = prompt(input, "Enter asset type (0 - texture, 1 - audio, 2 - model): ")?
    else {
        return Ok(());
    };
    match parse_asset_type(&raw_type) {
        Ok(ty) => print_assets(catalog, &catalog.find_by_type(ty)),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn list_by_keyword(input: &mut impl BufRead, catalog: &AssetCatalog) -> Result<()> {
    let Some(keyword) = prompt(input, "Enter keyword: ")? else {
        return Ok(());
    };
    print_assets(catalog, &catalog.find_by_keyword(&keyword));
    Ok(())
}

fn remove_asset(input: &mut impl BufRead, catalog: &mut AssetCatalog) -> Result<()> {
    let Some(name) = prompt(input, "Enter asset name: ")? else {
        return Ok(());
    };
    catalog.remove(&name);
    Ok(())
}

fn show_related(input: &mut impl BufRead, catalog: &AssetCatalog) -> Result<()> {
    let Some(name) = prompt(input, "Enter asset name: ")? else {
        return Ok(());
    };
    let related = catalog.related_of(&name);
    if related.is_empty() {
        println!("No related assets found.");
    } else {
        println!("Related assets:");
        print_assets(catalog, &related);
    }
    Ok(())
}

fn link_assets(input: &mut impl BufRead, catalog: &mut AssetCatalog) -> Result<()> {
    let Some(from) = prompt(input, "Enter source asset name: ")? else {
        return Ok(());
    };
    let Some(to) = prompt(input, "Enter related asset name: ")? else {
        return Ok(());
    };
    match (catalog.find_by_name(&from), catalog.find_by_name(&to)) {
        (Some(from_id), Some(to_id)) => {
            catalog.add_relation(from_id, to_id);
            println!("Linked '{from}' -> '{to}'");
        }
        _ => println!("Both assets must exist in the catalogue."),
    }
    Ok(())
}

fn dump_catalog(catalog: &AssetCatalog) -> Result<()> {
    let records: Vec<_> = catalog.iter().map(|(_, record)| record).collect();
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
