//! Tiled (`.tmx`) map files with CSV-encoded layers.
//!
//! Only what a single-tilesheet map needs is read: `firstgid` of the first
//! `<tileset>` and the `<data>` of every `<layer>`, in document order.
//!
//! ```text
//! <map ...>
//!   <tileset firstgid="1" .../>
//!   <layer name="ground" ...>
//!     <data encoding="csv">1,2,3,
//! 4,0,6</data>
//!   </layer>
//! </map>
//! ```

use std::path::Path;

use super::{TileMap, TilemapError, Tilesheet};

/// Encoding Tiled assumes when a `<data>` element has no `encoding`
/// attribute (one `<tile gid=".."/>` child per cell).
const DEFAULT_ENCODING: &str = "xml";

/// Read a TMX file and build one [`TileMap`] per layer.
pub fn tmx_file_to_tilemaps<'a, P: AsRef<Path>>(
    path: P,
    tilesheet: &'a Tilesheet,
) -> Result<Vec<TileMap<'a>>, TilemapError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| TilemapError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let maps = tmx_to_tilemaps(&text, tilesheet)?;
    log::debug!("TMX {}: {} layers", path.display(), maps.len());
    Ok(maps)
}

/// Build one [`TileMap`] per layer of an in-memory TMX document.
///
/// Fails with [`TilemapError::LayerNotCsv`] on the first layer whose data is
/// not CSV encoded.
pub fn tmx_to_tilemaps<'a>(
    text: &str,
    tilesheet: &'a Tilesheet,
) -> Result<Vec<TileMap<'a>>, TilemapError> {
    let document = roxmltree::Document::parse(text)?;

    let firstgid = document
        .descendants()
        .find(|node| node.has_tag_name("tileset"))
        .ok_or(TilemapError::MissingTileset)?
        .attribute("firstgid")
        .ok_or(TilemapError::MissingTileset)?;
    let firstgid: usize = firstgid
        .trim()
        .parse()
        .map_err(|_| TilemapError::InvalidFirstGid(firstgid.to_string()))?;

    let layers = document
        .descendants()
        .filter(|node| node.has_tag_name("layer"))
        .filter_map(|layer| layer.children().find(|node| node.has_tag_name("data")));

    let mut csv_layers = Vec::new();
    for data in layers {
        let encoding = data.attribute("encoding").unwrap_or(DEFAULT_ENCODING);
        if encoding != "csv" {
            return Err(TilemapError::LayerNotCsv {
                encoding: encoding.to_string(),
            });
        }
        csv_layers.push(data.text().unwrap_or("").trim());
    }

    csv_layers
        .into_iter()
        .map(|csv| TileMap::from_csv(csv, tilesheet, firstgid))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Size;
    use crate::tilemap::TileRules;
    use crate::tilemap::tilesheet::tests::sheet_surface;

    const TWO_LAYERS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<map version="1.0" orientation="orthogonal" width="3" height="2" tilewidth="2" tileheight="2">
 <tileset firstgid="1" name="sheet" tilewidth="2" tileheight="2">
  <image source="sheet.png" width="7" height="5"/>
 </tileset>
 <layer name="ground" width="3" height="2">
  <data encoding="csv">
1,2,3,
4,5,6
</data>
 </layer>
 <layer name="walls" width="3" height="2">
  <data encoding="csv">
0,3,0,
6,0,0
</data>
 </layer>
</map>
"#;

    fn sheet() -> Tilesheet {
        let rules = TileRules::parse("2=solid_block").unwrap();
        Tilesheet::from_surface(sheet_surface(), Size::new(2, 2), &rules)
    }

    #[test]
    fn test_tmx_file_layers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level.tmx");
        std::fs::write(&path, TWO_LAYERS).unwrap();

        let sheet = sheet();
        let maps = tmx_file_to_tilemaps(&path, &sheet).unwrap();

        assert_eq!(maps.len(), 2);
        assert_eq!(
            maps[0].rows(),
            [vec![Some(0), Some(1), Some(2)], vec![Some(3), Some(4), Some(5)]]
        );
        assert_eq!(
            maps[1].rows(),
            [vec![None, Some(2), None], vec![Some(5), None, None]]
        );
        assert_eq!(maps[1].solid_blocks().len(), 1);
    }

    #[test]
    fn test_tmx_layer_not_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("base64.tmx");
        let text = TWO_LAYERS.replacen(r#"encoding="csv""#, r#"encoding="base64""#, 1);
        std::fs::write(&path, text).unwrap();

        let sheet = sheet();
        let result = tmx_file_to_tilemaps(&path, &sheet);
        assert!(matches!(
            result,
            Err(TilemapError::LayerNotCsv { ref encoding }) if encoding == "base64"
        ));
    }

    #[test]
    fn test_tmx_plain_xml_layer_not_csv() {
        let text = r#"<map><tileset firstgid="1"/><layer><data><tile gid="1"/></data></layer></map>"#;
        let sheet = sheet();
        let result = tmx_to_tilemaps(text, &sheet);
        assert!(matches!(
            result,
            Err(TilemapError::LayerNotCsv { ref encoding }) if encoding == "xml"
        ));
    }

    #[test]
    fn test_tmx_errors() {
        let sheet = sheet();

        assert!(matches!(
            tmx_to_tilemaps("<map><layer/>", &sheet),
            Err(TilemapError::Xml(_))
        ));
        assert!(matches!(
            tmx_to_tilemaps("<map></map>", &sheet),
            Err(TilemapError::MissingTileset)
        ));
        assert!(matches!(
            tmx_to_tilemaps(r#"<map><tileset firstgid="x"/></map>"#, &sheet),
            Err(TilemapError::InvalidFirstGid(_))
        ));

        let dir = tempfile::tempdir().unwrap();
        let missing = tmx_file_to_tilemaps(dir.path().join("none.tmx"), &sheet);
        assert!(matches!(missing, Err(TilemapError::Io { .. })));
    }

    #[test]
    fn test_tmx_without_layers() {
        let sheet = sheet();
        let maps = tmx_to_tilemaps(r#"<map><tileset firstgid="1"/></map>"#, &sheet).unwrap();
        assert!(maps.is_empty());
    }
}
