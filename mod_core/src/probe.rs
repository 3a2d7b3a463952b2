/// Per-stage call counters used by the loader's test harness.
///
/// Lives here so the host-side tests and the probe fixture mod agree on the
/// layout: a test hands the bridge a pointer to one of these as the host
/// handle, and the fixture's hooks increment the field for whichever stage
/// actually ran.
#[repr(C)]
#[derive(Debug, Default)]
pub struct ProbeCounters {
    pub before_calls: u32,
    pub after_calls: u32,
}
