//! Codecs for key/value mappings.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::encoding::{Encoding, EncodingByte};
use crate::error::{NopError, Status};
use crate::io::{Reader, Writer};

fn map_encoded_size<'a, K, V, I>(len: usize, pairs: I) -> usize
where
    K: Encoding + 'a,
    V: Encoding + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    let payload: usize =
        pairs.map(|(key, value)| key.encoded_size() + value.encoded_size()).sum();
    1 + (len as u64).encoded_size() + payload
}

fn write_map_payload<'a, K, V, I, W>(len: usize, pairs: I, writer: &mut W) -> Status<()>
where
    K: Encoding + 'a,
    V: Encoding + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
    W: Writer + ?Sized,
{
    (len as u64).write(writer)?;
    for (key, value) in pairs {
        key.write(writer)?;
        value.write(writer)?;
    }
    Ok(())
}

fn read_pair_count<R: Reader + ?Sized>(reader: &mut R) -> Status<usize> {
    let count = u64::read(reader)?;
    let count = usize::try_from(count).map_err(|_| NopError::InvalidContainerLength)?;
    // Each pair is at least two prefix bytes.
    reader.ensure(count.saturating_mul(2))?;
    Ok(count)
}

impl<K: Encoding + Ord, V: Encoding> Encoding for BTreeMap<K, V> {
    fn prefix(&self) -> EncodingByte {
        EncodingByte::Map
    }

    fn encoded_size(&self) -> usize {
        map_encoded_size(self.len(), self.iter())
    }

    fn matches(prefix: EncodingByte) -> bool {
        prefix == EncodingByte::Map
    }

    fn write_payload<W: Writer + ?Sized>(
        &self,
        _prefix: EncodingByte,
        writer: &mut W,
    ) -> Status<()> {
        write_map_payload(self.len(), self.iter(), writer)
    }

    fn read_payload<R: Reader + ?Sized>(_prefix: EncodingByte, reader: &mut R) -> Status<Self> {
        let count = read_pair_count(reader)?;
        let mut map = BTreeMap::new();
        for _ in 0..count {
            let key = K::read(reader)?;
            let value = V::read(reader)?;
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<K, V, S> Encoding for HashMap<K, V, S>
where
    K: Encoding + Eq + Hash,
    V: Encoding,
    S: BuildHasher + Default,
{
    fn prefix(&self) -> EncodingByte {
        EncodingByte::Map
    }

    fn encoded_size(&self) -> usize {
        map_encoded_size(self.len(), self.iter())
    }

    fn matches(prefix: EncodingByte) -> bool {
        prefix == EncodingByte::Map
    }

    fn write_payload<W: Writer + ?Sized>(
        &self,
        _prefix: EncodingByte,
        writer: &mut W,
    ) -> Status<()> {
        write_map_payload(self.len(), self.iter(), writer)
    }

    fn read_payload<R: Reader + ?Sized>(_prefix: EncodingByte, reader: &mut R) -> Status<Self> {
        let count = read_pair_count(reader)?;
        let mut map = HashMap::with_capacity_and_hasher(count, S::default());
        for _ in 0..count {
            let key = K::read(reader)?;
            let value = V::read(reader)?;
            map.insert(key, value);
        }
        Ok(map)
    }
}
