//! Consumer-facing lookup API over a completed pack.
//!
//! [`AssetContainer`] is the only surface downstream consumers and the pack
//! aggregator touch: a single `(namespace, path)` accessor plus convenience
//! methods that apply the fixed path conventions for common asset kinds.

use crate::error::AssetError;
use crate::identifier::ResourceId;
use crate::store::{BufferPack, ByteStream, ResourceKind};

pub const MODELS: &str = "models/";
pub const TEXTURES: &str = "textures/";
pub const SOUNDS: &str = "sounds/";
pub const BLOCKSTATES: &str = "blockstates/";

/// Streams backing one texture: the image itself plus its optional
/// animation/metadata sidecar. A missing sidecar is normal, not an error.
pub struct TextureStreams {
    pub texture: ByteStream,
    pub meta: Option<ByteStream>,
}

/// Addressed access to the assets of one container.
pub trait AssetContainer {
    /// Retrieve a stream over the asset at `(namespace, path)`.
    ///
    /// Fails with [`AssetError::NotFound`] when absent and
    /// [`AssetError::InvalidIdentifier`] when the key is malformed.
    fn get_asset(&self, namespace: &str, path: &str) -> Result<ByteStream, AssetError>;

    /// Whether an asset exists, using the same lookup logic as
    /// [`AssetContainer::get_asset`].
    fn contains_asset(&self, namespace: &str, path: &str) -> bool;

    /// `"testsound"` resolves `sounds/testsound.ogg`.
    fn sound_file(&self, namespace: &str, path: &str) -> Result<ByteStream, AssetError> {
        self.get_asset(namespace, &format!("{SOUNDS}{path}.ogg"))
    }

    /// `"testblock"` resolves `blockstates/testblock.json`.
    fn block_state_definition(
        &self,
        namespace: &str,
        path: &str,
    ) -> Result<ByteStream, AssetError> {
        self.get_asset(namespace, &format!("{BLOCKSTATES}{path}.json"))
    }

    /// `"testblock"` resolves `models/block/testblock.json`.
    fn block_model(&self, namespace: &str, path: &str) -> Result<ByteStream, AssetError> {
        self.model(namespace, &format!("block/{path}"))
    }

    /// `"testitem"` resolves `models/item/testitem.json`.
    fn item_model(&self, namespace: &str, path: &str) -> Result<ByteStream, AssetError> {
        self.model(namespace, &format!("item/{path}"))
    }

    /// `"item/testitem"` resolves `models/item/testitem.json`.
    fn model(&self, namespace: &str, path: &str) -> Result<ByteStream, AssetError> {
        self.get_asset(namespace, &format!("{MODELS}{path}.json"))
    }

    /// `"item/testtexture"` resolves `textures/item/testtexture.png`, plus
    /// the `.png.mcmeta` sidecar when one exists.
    fn texture(&self, namespace: &str, path: &str) -> Result<TextureStreams, AssetError> {
        let texture = self.get_asset(namespace, &format!("{TEXTURES}{path}.png"))?;

        let meta_path = format!("{TEXTURES}{path}.png.mcmeta");
        let meta = if self.contains_asset(namespace, &meta_path) {
            Some(self.get_asset(namespace, &meta_path)?)
        } else {
            None
        };

        Ok(TextureStreams { texture, meta })
    }
}

impl AssetContainer for BufferPack {
    fn get_asset(&self, namespace: &str, path: &str) -> Result<ByteStream, AssetError> {
        let id = ResourceId::new(namespace, path)?;
        self.open(ResourceKind::Client, &id)
            .ok_or_else(|| AssetError::not_found(namespace, path))
    }

    fn contains_asset(&self, namespace: &str, path: &str) -> bool {
        ResourceId::try_parse(namespace, path)
            .is_some_and(|id| self.contains(ResourceKind::Client, &id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn pack_with(entries: &[(&str, &str, &[u8])]) -> BufferPack {
        let mut pack = BufferPack::new("test");
        for (ns, path, bytes) in entries {
            pack.put(
                ResourceKind::Client,
                ResourceId::new(ns, path).unwrap(),
                bytes.to_vec(),
            );
        }
        pack
    }

    fn read_all(mut stream: ByteStream) -> Vec<u8> {
        let mut out = Vec::new();
        stream.read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn get_asset_hits_and_misses() {
        let pack = pack_with(&[("mymod", "models/item/testitem.json", b"{}")]);

        let stream = pack.get_asset("mymod", "models/item/testitem.json").unwrap();
        assert_eq!(read_all(stream), b"{}");

        assert!(matches!(
            pack.get_asset("mymod", "models/item/missing.json"),
            Err(AssetError::NotFound { .. })
        ));
        assert!(!pack.contains_asset("mymod", "models/item/missing.json"));
    }

    #[test]
    fn malformed_key_is_invalid_identifier() {
        let pack = pack_with(&[]);
        assert!(matches!(
            pack.get_asset("Bad Namespace", "x.json"),
            Err(AssetError::InvalidIdentifier { .. })
        ));
        assert!(!pack.contains_asset("Bad Namespace", "x.json"));
    }

    #[test]
    fn convenience_paths_resolve() {
        let pack = pack_with(&[
            ("m", "sounds/testsound.ogg", b"ogg"),
            ("m", "blockstates/testblock.json", b"bs"),
            ("m", "models/block/testblock.json", b"bm"),
            ("m", "models/item/testitem.json", b"im"),
        ]);

        assert_eq!(read_all(pack.sound_file("m", "testsound").unwrap()), b"ogg");
        assert_eq!(
            read_all(pack.block_state_definition("m", "testblock").unwrap()),
            b"bs"
        );
        assert_eq!(read_all(pack.block_model("m", "testblock").unwrap()), b"bm");
        assert_eq!(read_all(pack.item_model("m", "testitem").unwrap()), b"im");
        assert_eq!(
            read_all(pack.model("m", "item/testitem").unwrap()),
            b"im"
        );
    }

    #[test]
    fn texture_with_sidecar() {
        let pack = pack_with(&[
            ("m", "textures/item/x.png", b"png"),
            ("m", "textures/item/x.png.mcmeta", b"meta"),
        ]);

        let streams = pack.texture("m", "item/x").unwrap();
        assert_eq!(read_all(streams.texture), b"png");
        assert_eq!(read_all(streams.meta.unwrap()), b"meta");
    }

    #[test]
    fn texture_without_sidecar() {
        let pack = pack_with(&[("m", "textures/item/x.png", b"png")]);

        let streams = pack.texture("m", "item/x").unwrap();
        assert_eq!(read_all(streams.texture), b"png");
        assert!(streams.meta.is_none());
    }

    #[test]
    fn texture_missing_is_not_found() {
        let pack = pack_with(&[]);
        assert!(matches!(
            pack.texture("m", "item/x"),
            Err(AssetError::NotFound { .. })
        ));
    }
}
