// libnfcb/src/card/list.rs

use super::ListenDevice;

/// Listen devices of one round, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceList {
    devices: Vec<ListenDevice>,
}

impl DeviceList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of identified devices.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// True when no device was identified.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Device at `index`, in discovery order.
    pub fn get(&self, index: usize) -> Option<&ListenDevice> {
        self.devices.get(index)
    }

    /// Iterate in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, ListenDevice> {
        self.devices.iter()
    }

    /// All devices as a slice.
    pub fn as_slice(&self) -> &[ListenDevice] {
        &self.devices
    }

    pub(crate) fn push(&mut self, device: ListenDevice) {
        self.devices.push(device);
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut ListenDevice> {
        self.devices.last_mut()
    }
}

impl IntoIterator for DeviceList {
    type Item = ListenDevice;
    type IntoIter = std::vec::IntoIter<ListenDevice>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.into_iter()
    }
}

impl<'a> IntoIterator for &'a DeviceList {
    type Item = &'a ListenDevice;
    type IntoIter = std::slice::Iter<'a, ListenDevice>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}
