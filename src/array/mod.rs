//! Dense, growable array of quaternions.
//!
//! Storage is a single contiguous buffer of 32-byte slots, one
//! quaternion per slot, components in `w, x, y, z` order and native
//! endianness. Growth is amortised doubling with an 8-slot floor and a
//! user-settable reserve floor; the buffer never shrinks implicitly.

mod iter;
mod slice;

pub use iter::Iter;
pub use slice::Slice;

use slice::resolve_index;

use crate::error::{QuatError, Result};
use crate::Quaternion;

use bytes::{Buf, BufMut, Bytes, BytesMut};

use std::io::{ErrorKind, Read, Write};

/// Growable contiguous array of [`Quaternion`] values.
///
/// Mirrors a typed array: elements are stored by value in one flat
/// allocation, indexable with negative indices and extended
/// `start:stop:step` slices, exportable as raw native-endian bytes, and
/// viewable as a flat `&[f64]` of `4·len` doubles.
///
/// # Examples
/// ```
/// use quaternion_math::{Quaternion, QuaternionArray};
///
/// let mut a = QuaternionArray::new();
/// a.append(Quaternion::ONE);
/// a.append(Quaternion::I);
/// assert_eq!(a.len(), 2);
/// assert_eq!(a.get(-1).unwrap(), Quaternion::I);
/// assert_eq!(a.to_bytes().len(), 2 * QuaternionArray::ITEM_SIZE);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuaternionArray {
    data: Vec<Quaternion>,
    reserved: usize,
}

impl QuaternionArray {
    /// Size of one element slot in bytes.
    pub const ITEM_SIZE: usize = std::mem::size_of::<Quaternion>();

    /// Creates an empty array with no storage allocated.
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            reserved: 0,
        }
    }

    /// Creates an empty array with a capacity floor of `reserve` slots,
    /// allocated immediately.
    pub fn with_reserve(reserve: usize) -> Self {
        Self {
            data: Vec::with_capacity(reserve),
            reserved: reserve,
        }
    }

    /// Builds an array from a flat run of doubles, four per element in
    /// `w, x, y, z` order. The length must be a multiple of four.
    pub fn from_flat(values: &[f64]) -> Result<Self> {
        if values.len() % 4 != 0 {
            return Err(QuatError::value(format!(
                "flat length {} is not a multiple of 4",
                values.len()
            )));
        }
        Ok(values
            .chunks_exact(4)
            .map(|c| Quaternion::new(c[0], c[1], c[2], c[3]))
            .collect())
    }

    /// Parses all the bytes of `payload` as native-endian 32-byte slots.
    /// The length must be a multiple of [`QuaternionArray::ITEM_SIZE`].
    pub fn from_bytes(payload: &[u8]) -> Result<Self> {
        let mut array = Self::new();
        array.extend_from_bytes(payload)?;
        Ok(array)
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Physical capacity, in slots.
    pub fn allocated(&self) -> usize {
        self.data.capacity()
    }

    /// The user-requested capacity floor, in slots.
    pub fn reserved(&self) -> usize {
        self.reserved
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[Quaternion] {
        &self.data
    }

    /// Read view of the storage as `4·len` contiguous doubles.
    ///
    /// The view borrows the array, so any mutation (and with it any
    /// reallocation) is excluded until the view is released.
    pub fn as_flat(&self) -> &[f64] {
        bytemuck::cast_slice(&self.data)
    }

    /// The storage base address and element count, `(0, 0)` when no
    /// storage has been allocated.
    pub fn buffer_info(&self) -> (usize, usize) {
        if self.data.capacity() == 0 {
            (0, 0)
        } else {
            (self.data.as_ptr() as usize, self.data.len())
        }
    }

    /// Iterator over the elements in index order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Grows physical capacity for at least `needed` total slots:
    /// `max(needed, max(2·capacity, 8, reserved))`.
    fn ensure_capacity(&mut self, needed: usize) {
        let cap = self.data.capacity();
        if needed <= cap {
            return;
        }
        let target = needed.max((2 * cap).max(8).max(self.reserved));
        self.data.reserve_exact(target - self.data.len());
    }

    /// Sets the capacity floor to `floor` slots. Capacity grows to the
    /// floor immediately if below it, and shrinks toward
    /// `max(floor, len)` if above it.
    pub fn reserve(&mut self, floor: usize) {
        self.reserved = floor;
        if floor > self.data.capacity() {
            self.data.reserve_exact(floor - self.data.len());
        } else {
            self.data.shrink_to(floor.max(self.data.len()));
        }
    }

    /// Element at `index`; negative indices count from the back.
    pub fn get(&self, index: isize) -> Result<Quaternion> {
        Ok(self.data[resolve_index(index, self.data.len())?])
    }

    /// Replaces the element at `index`; negative indices count from the
    /// back.
    pub fn set(&mut self, index: isize, q: Quaternion) -> Result<()> {
        let i = resolve_index(index, self.data.len())?;
        self.data[i] = q;
        Ok(())
    }

    /// Appends one element.
    pub fn append(&mut self, q: Quaternion) {
        self.ensure_capacity(self.data.len() + 1);
        self.data.push(q);
    }

    /// Appends every element of `items`.
    pub fn extend_from_slice(&mut self, items: &[Quaternion]) {
        self.ensure_capacity(self.data.len() + items.len());
        self.data.extend_from_slice(items);
    }

    /// Inserts `q` before `index`. Out-of-range indices clamp to the
    /// ends, so inserting never fails.
    pub fn insert(&mut self, index: isize, q: Quaternion) {
        let len = self.data.len() as isize;
        let i = if index < 0 {
            (index + len).max(0)
        } else {
            index.min(len)
        } as usize;
        self.ensure_capacity(self.data.len() + 1);
        self.data.insert(i, q);
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Result<Quaternion> {
        self.pop_at(-1)
    }

    /// Removes and returns the element at `index`; negative indices
    /// count from the back.
    pub fn pop_at(&mut self, index: isize) -> Result<Quaternion> {
        let i = resolve_index(index, self.data.len())?;
        Ok(self.data.remove(i))
    }

    /// Removes the first element equal to `q`; fails when absent.
    pub fn remove(&mut self, q: &Quaternion) -> Result<()> {
        let i = self.position(q)?;
        self.data.remove(i);
        Ok(())
    }

    /// Index of the first element equal to `q`; fails when absent.
    pub fn position(&self, q: &Quaternion) -> Result<usize> {
        self.data
            .iter()
            .position(|e| e == q)
            .ok_or_else(|| QuatError::value("quaternion not found in array"))
    }

    /// Number of elements equal to `q`.
    pub fn count(&self, q: &Quaternion) -> usize {
        self.data.iter().filter(|e| *e == q).count()
    }

    /// Removes every element; capacity and the reserve floor are kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Reverses the element order in place.
    pub fn reverse(&mut self) {
        self.data.reverse();
    }

    /// Reverses the byte order of every stored double in place.
    pub fn byteswap(&mut self) {
        for q in &mut self.data {
            q.w = f64::from_bits(q.w.to_bits().swap_bytes());
            q.x = f64::from_bits(q.x.to_bits().swap_bytes());
            q.y = f64::from_bits(q.y.to_bits().swap_bytes());
            q.z = f64::from_bits(q.z.to_bits().swap_bytes());
        }
    }

    /// New array holding the elements selected by `selector`, in
    /// selection order. Fails only on a zero step.
    pub fn slice(&self, selector: &Slice) -> Result<QuaternionArray> {
        let resolved = selector.resolve(self.data.len())?;
        let mut data = Vec::with_capacity(resolved.count);
        for i in resolved.indices() {
            data.push(self.data[i]);
        }
        Ok(QuaternionArray { data, reserved: 0 })
    }

    /// Replaces the elements selected by `selector` with `items`.
    ///
    /// A contiguous selection (`step == 1`) may change the array length,
    /// splicing `items` in. A stepped selection requires `items` to have
    /// exactly the selected length and overwrites in place. Validation
    /// happens before any element is touched.
    pub fn set_slice(&mut self, selector: &Slice, items: &[Quaternion]) -> Result<()> {
        let resolved = selector.resolve(self.data.len())?;
        if resolved.step == 1 {
            let start = resolved.start as usize;
            self.ensure_capacity(self.data.len() - resolved.count + items.len());
            // The splice applies when the returned drain iterator drops.
            let _ = self
                .data
                .splice(start..start + resolved.count, items.iter().copied());
        } else {
            if items.len() != resolved.count {
                return Err(QuatError::value(format!(
                    "cannot assign {} quaternions to a stepped slice of {} positions",
                    items.len(),
                    resolved.count
                )));
            }
            for (i, q) in resolved.indices().zip(items.iter()) {
                self.data[i] = *q;
            }
        }
        Ok(())
    }

    /// Removes the element at `index`, preserving the order of the
    /// rest; negative indices count from the back.
    pub fn delete(&mut self, index: isize) -> Result<()> {
        let i = resolve_index(index, self.data.len())?;
        self.data.remove(i);
        Ok(())
    }

    /// Removes exactly the elements selected by `selector`, preserving
    /// the order of the rest.
    pub fn delete_slice(&mut self, selector: &Slice) -> Result<()> {
        let resolved = selector.resolve(self.data.len())?;
        if resolved.count == 0 {
            return Ok(());
        }
        let mut selected = vec![false; self.data.len()];
        for i in resolved.indices() {
            selected[i] = true;
        }
        let mut next = 0;
        self.data.retain(|_| {
            let keep = !selected[next];
            next += 1;
            keep
        });
        Ok(())
    }

    /// The elements as native-endian bytes, one 32-byte `[w, x, y, z]`
    /// slot per element.
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.data.len() * Self::ITEM_SIZE);
        for q in &self.data {
            buf.put_f64_ne(q.w);
            buf.put_f64_ne(q.x);
            buf.put_f64_ne(q.y);
            buf.put_f64_ne(q.z);
        }
        buf.freeze()
    }

    /// Appends every slot of `payload`, which must be a whole number of
    /// 32-byte slots. Nothing is appended on failure.
    pub fn extend_from_bytes(&mut self, payload: &[u8]) -> Result<()> {
        if payload.len() % Self::ITEM_SIZE != 0 {
            return Err(QuatError::value(format!(
                "byte length {} is not a multiple of the {}-byte slot size",
                payload.len(),
                Self::ITEM_SIZE
            )));
        }
        let count = payload.len() / Self::ITEM_SIZE;
        self.ensure_capacity(self.data.len() + count);
        let mut cursor = payload;
        for _ in 0..count {
            let w = cursor.get_f64_ne();
            let x = cursor.get_f64_ne();
            let y = cursor.get_f64_ne();
            let z = cursor.get_f64_ne();
            self.data.push(Quaternion::new(w, x, y, z));
        }
        Ok(())
    }

    /// Writes exactly `32·len` bytes to `out`, in element order.
    pub fn to_file<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Reads exactly `count` slots from `input` and appends them.
    ///
    /// Short data fails with [`QuatError::Eof`] reporting the number of
    /// whole slots available, and appends nothing — no truncated slot is
    /// ever stored.
    pub fn from_file<R: Read>(&mut self, input: &mut R, count: usize) -> Result<()> {
        let mut payload = vec![0u8; count * Self::ITEM_SIZE];
        let mut filled = 0;
        while filled < payload.len() {
            match input.read(&mut payload[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(QuatError::Io(e)),
            }
        }
        if filled < payload.len() {
            return Err(QuatError::Eof {
                requested: count,
                got: filled / Self::ITEM_SIZE,
            });
        }
        self.extend_from_bytes(&payload)
    }
}

/// Element-wise equality; capacity counters do not participate.
impl PartialEq for QuaternionArray {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl From<Vec<Quaternion>> for QuaternionArray {
    fn from(data: Vec<Quaternion>) -> Self {
        Self { data, reserved: 0 }
    }
}

impl From<&[Quaternion]> for QuaternionArray {
    fn from(items: &[Quaternion]) -> Self {
        Self {
            data: items.to_vec(),
            reserved: 0,
        }
    }
}

impl FromIterator<Quaternion> for QuaternionArray {
    fn from_iter<T: IntoIterator<Item = Quaternion>>(iter: T) -> Self {
        Self {
            data: iter.into_iter().collect(),
            reserved: 0,
        }
    }
}

impl Extend<Quaternion> for QuaternionArray {
    fn extend<T: IntoIterator<Item = Quaternion>>(&mut self, iter: T) {
        let items: Vec<Quaternion> = iter.into_iter().collect();
        self.extend_from_slice(&items);
    }
}

impl core::ops::Index<usize> for QuaternionArray {
    type Output = Quaternion;
    fn index(&self, index: usize) -> &Quaternion {
        &self.data[index]
    }
}

impl core::ops::IndexMut<usize> for QuaternionArray {
    fn index_mut(&mut self, index: usize) -> &mut Quaternion {
        &mut self.data[index]
    }
}

/// Concatenation.
impl core::ops::Add for &QuaternionArray {
    type Output = QuaternionArray;
    fn add(self, rhs: Self) -> QuaternionArray {
        let mut data = Vec::with_capacity(self.len() + rhs.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&rhs.data);
        QuaternionArray { data, reserved: 0 }
    }
}

/// In-place concatenation.
impl core::ops::AddAssign<&QuaternionArray> for QuaternionArray {
    fn add_assign(&mut self, rhs: &QuaternionArray) {
        self.extend_from_slice(&rhs.data);
    }
}

/// Repetition: `a * 3` holds the elements of `a` three times over.
impl core::ops::Mul<usize> for &QuaternionArray {
    type Output = QuaternionArray;
    fn mul(self, times: usize) -> QuaternionArray {
        let mut data = Vec::with_capacity(self.len() * times);
        for _ in 0..times {
            data.extend_from_slice(&self.data);
        }
        QuaternionArray { data, reserved: 0 }
    }
}

impl core::ops::Mul<&QuaternionArray> for usize {
    type Output = QuaternionArray;
    fn mul(self, array: &QuaternionArray) -> QuaternionArray {
        array * self
    }
}

/// In-place repetition; zero empties the array.
impl core::ops::MulAssign<usize> for QuaternionArray {
    fn mul_assign(&mut self, times: usize) {
        if times == 0 {
            self.data.clear();
            return;
        }
        let original = self.data.clone();
        self.ensure_capacity(original.len() * times);
        for _ in 1..times {
            self.data.extend_from_slice(&original);
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QuaternionArray {
    /// Serialises as `(reserved, payload_bytes)` where the payload is
    /// [`QuaternionArray::to_bytes`].
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (self.reserved, self.to_bytes().as_ref()).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for QuaternionArray {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let (reserved, payload): (usize, Vec<u8>) = serde::Deserialize::deserialize(deserializer)?;
        let mut array = QuaternionArray::with_reserve(reserved);
        array
            .extend_from_bytes(&payload)
            .map_err(serde::de::Error::custom)?;
        Ok(array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reals(values: impl IntoIterator<Item = i32>) -> QuaternionArray {
        values
            .into_iter()
            .map(|v| Quaternion::from_real(f64::from(v)))
            .collect()
    }

    #[test]
    fn equality_is_element_wise() {
        let a = reals(1..=4);
        let b = reals(1..=4);
        let c = reals(1..=5);
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn reserve_constructor_allocates_immediately() {
        let a = QuaternionArray::with_reserve(1027);
        assert_eq!(QuaternionArray::ITEM_SIZE, 32);
        assert_eq!(a.allocated(), 1027);
        assert_eq!(a.reserved(), 1027);
        assert_eq!(a.len(), 0);
    }

    #[test]
    fn growth_doubles_with_an_eight_slot_floor() {
        let mut a = QuaternionArray::new();
        assert_eq!(a.allocated(), 0);
        a.append(Quaternion::ONE);
        assert_eq!(a.allocated(), 8);
        for i in 0..8 {
            a.append(Quaternion::from_real(f64::from(i)));
        }
        assert_eq!(a.allocated(), 16);
    }

    #[test]
    fn growth_respects_the_reserve_floor() {
        let mut a = QuaternionArray::new();
        a.reserve(100);
        assert_eq!(a.allocated(), 100);
        for i in 0..101 {
            a.append(Quaternion::from_real(f64::from(i)));
        }
        assert_eq!(a.allocated(), 200);
    }

    #[test]
    fn reserve_can_shrink_but_never_below_len() {
        let mut a = reals(0..10);
        a.reserve(64);
        assert_eq!(a.allocated(), 64);
        a.reserve(4);
        assert_eq!(a.allocated(), 10);
        assert_eq!(a.len(), 10);
        assert_eq!(a.reserved(), 4);
    }

    #[test]
    fn from_flat_requires_a_multiple_of_four() {
        let a = QuaternionArray::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(a[0], Quaternion::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(a[1], Quaternion::new(5.0, 6.0, 7.0, 8.0));

        assert!(QuaternionArray::from_flat(&[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn get_and_set_support_negative_indices() {
        let mut a = reals(0..5);
        assert_eq!(a.get(0).unwrap().w, 0.0);
        assert_eq!(a.get(-1).unwrap().w, 4.0);
        assert!(matches!(a.get(5), Err(QuatError::Index { .. })));
        assert!(a.get(-6).is_err());

        a.set(-2, Quaternion::I).unwrap();
        assert_eq!(a[3], Quaternion::I);
        assert!(a.set(7, Quaternion::I).is_err());
    }

    #[test]
    fn insert_clamps_out_of_range_positions() {
        let mut a = reals([1, 2]);
        a.insert(0, Quaternion::from_real(0.0));
        a.insert(100, Quaternion::from_real(3.0));
        a.insert(-100, Quaternion::from_real(-1.0));
        let seen: Vec<f64> = a.iter().map(|q| q.w).collect();
        assert_eq!(seen, [-1.0, 0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn pop_remove_position_count() {
        let mut a = reals([1, 2, 3, 2]);
        assert_eq!(a.pop().unwrap().w, 2.0);
        assert_eq!(a.pop_at(0).unwrap().w, 1.0);
        assert_eq!(a.len(), 2);

        assert_eq!(a.position(&Quaternion::from_real(3.0)).unwrap(), 1);
        assert_eq!(a.count(&Quaternion::from_real(2.0)), 1);
        a.remove(&Quaternion::from_real(2.0)).unwrap();
        assert!(a.remove(&Quaternion::from_real(99.0)).is_err());
        assert!(a.position(&Quaternion::from_real(99.0)).is_err());

        let mut empty = QuaternionArray::new();
        assert!(empty.pop().is_err());
    }

    #[test]
    fn reverse_matches_reversed_construction() {
        let mut a = reals([1, 2, 3, 4, 7]);
        let b = reals([7, 4, 3, 2, 1]);
        a.reverse();
        assert_eq!(a, b);
    }

    #[test]
    fn clear_keeps_capacity_and_reserve() {
        let mut a = reals(0..10);
        a.reserve(12);
        a.clear();
        assert!(a.is_empty());
        assert_eq!(a.reserved(), 12);
        assert!(a.allocated() >= 12);
    }

    #[test]
    fn slicing_returns_a_new_array() {
        let a = reals(0..10);
        let every_third = a.slice(&Slice::step_by(3)).unwrap();
        let seen: Vec<f64> = every_third.iter().map(|q| q.w).collect();
        assert_eq!(seen, [0.0, 3.0, 6.0, 9.0]);
        assert!(a.slice(&Slice::step_by(0)).is_err());
    }

    #[test]
    fn contiguous_slice_assignment_may_resize() {
        let mut a = reals(0..6);
        let replacement = [Quaternion::from_real(100.0)];
        a.set_slice(&Slice::range(1, 4), &replacement).unwrap();
        let seen: Vec<f64> = a.iter().map(|q| q.w).collect();
        assert_eq!(seen, [0.0, 100.0, 4.0, 5.0]);
    }

    #[test]
    fn stepped_slice_assignment_requires_equal_length() {
        let mut a = reals(0..6);
        let two = [Quaternion::from_real(-1.0), Quaternion::from_real(-2.0)];
        assert!(a.set_slice(&Slice::step_by(2), &two).is_err());
        // Nothing was modified by the failed assignment.
        assert_eq!(a, reals(0..6));

        let three = [
            Quaternion::from_real(-1.0),
            Quaternion::from_real(-2.0),
            Quaternion::from_real(-3.0),
        ];
        a.set_slice(&Slice::step_by(2), &three).unwrap();
        let seen: Vec<f64> = a.iter().map(|q| q.w).collect();
        assert_eq!(seen, [-1.0, 1.0, -2.0, 3.0, -3.0, 5.0]);
    }

    #[test]
    fn deletion_preserves_order_of_the_rest() {
        let mut a = reals(0..8);
        a.delete(-1).unwrap();
        a.delete(0).unwrap();
        let seen: Vec<f64> = a.iter().map(|q| q.w).collect();
        assert_eq!(seen, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        a.delete_slice(&Slice::step_by(2)).unwrap();
        let seen: Vec<f64> = a.iter().map(|q| q.w).collect();
        assert_eq!(seen, [2.0, 4.0, 6.0]);

        a.delete_slice(&Slice::step_by(-1)).unwrap();
        assert!(a.is_empty());
        assert!(a.delete(0).is_err());
    }

    #[test]
    fn byteswap_is_an_involution_and_matches_swapped_bytes() {
        let mut a = reals([1, 2, 3]);
        let original = a.clone();
        let plain = a.to_bytes();

        a.byteswap();
        let swapped = a.to_bytes();
        for (slot, swapped_slot) in plain.chunks(8).zip(swapped.chunks(8)) {
            let mut reversed: Vec<u8> = slot.to_vec();
            reversed.reverse();
            assert_eq!(swapped_slot, &reversed[..]);
        }

        a.byteswap();
        assert_eq!(a, original);
    }

    #[test]
    fn byte_round_trip_and_stray_byte_rejection() {
        let a = reals([1, 2, 3, 4]);
        let payload = a.to_bytes();
        assert_eq!(payload.len(), 128);

        let b = QuaternionArray::from_bytes(&payload).unwrap();
        assert_eq!(a, b);

        let mut stray = payload.to_vec();
        stray.push(0);
        assert!(QuaternionArray::from_bytes(&stray).is_err());
    }

    #[test]
    fn file_round_trip_and_short_read() {
        use std::io::Cursor;

        let a = reals(0..5);
        let mut stream = Vec::new();
        a.to_file(&mut stream).unwrap();
        assert_eq!(stream.len(), 5 * QuaternionArray::ITEM_SIZE);

        let mut b = QuaternionArray::new();
        b.from_file(&mut Cursor::new(&stream), 5).unwrap();
        assert_eq!(a, b);

        // Ask for more slots than the stream holds: error, nothing
        // appended, whole slots reported.
        let mut c = QuaternionArray::new();
        let err = c.from_file(&mut Cursor::new(&stream[..70]), 5).unwrap_err();
        match err {
            QuatError::Eof { requested, got } => {
                assert_eq!(requested, 5);
                assert_eq!(got, 2);
            }
            other => panic!("expected Eof, got {other:?}"),
        }
        assert!(c.is_empty());
    }

    #[test]
    fn flat_view_exposes_all_components() {
        let a = reals([1, 2]);
        assert_eq!(
            a.as_flat(),
            [1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0]
        );

        let empty = QuaternionArray::new();
        assert_eq!(empty.buffer_info(), (0, 0));
        let (address, count) = a.buffer_info();
        assert_ne!(address, 0);
        assert_eq!(count, 2);
    }

    #[test]
    fn concatenation_and_repetition() {
        let a = reals([1, 2]);
        let b = reals([3]);

        let c = &a + &b;
        assert_eq!(c.len(), a.len() + b.len());
        assert_eq!(c, reals([1, 2, 3]));

        assert_eq!(&a * 3, reals([1, 2, 1, 2, 1, 2]));
        assert_eq!(2 * &b, reals([3, 3]));
        assert_eq!(&a * 0, QuaternionArray::new());

        let mut d = a.clone();
        d += &b;
        assert_eq!(d, c);
        d *= 2;
        assert_eq!(d, reals([1, 2, 3, 1, 2, 3]));
        d *= 0;
        assert!(d.is_empty());
    }
}
