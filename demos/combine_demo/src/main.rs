//! Six demonstrations of one operation: element-wise combine.
//!
//! Each demonstration computes the same five sums (or, in the last one,
//! five scaled values) while moving from a hand-written scalar loop to
//! validated CPU dispatch to staged device offload. All of them print
//! their results to stdout; the demonstrations run unconditionally in a
//! fixed order.

use elemwise_device::{
    add_execute, allocate, combine_execute, scale_inplace_execute, to_cpu, to_device, with_staged,
    Device, DeviceContext, Result,
};
use elemwise_ops::kernels::elementwise::add_at;
use elemwise_ops::ExecutionStrategy;

const SIZE: usize = 5;

/// Variant 1: scalar loop over fixed-size stack arrays, no library calls.
fn standard_method() -> String {
    // Initialization.
    let a = [1, 2, 3, 4, 5];
    let b = [6, 7, 8, 9, 10];
    let mut c = [0i32; SIZE];

    // Computation.
    for idx in 0..SIZE {
        c[idx] = a[idx] + b[idx];
    }

    // Checking.
    let mut out = String::new();
    for v in c {
        out.push_str(&format!("{v}\n"));
    }
    out.push('\n');
    out
}

/// Variant 2: validated CPU dispatch on the calling thread.
fn cpu_only() -> Result<String> {
    let mut out = String::from("CpuOnly\n");

    let a = [1, 2, 3, 4, 5];
    let b = [6, 7, 8, 9, 10];
    let mut c = [0i32; SIZE];

    elemwise_ops::add(&a, &b, &mut c, ExecutionStrategy::Serial)?;

    for v in c {
        out.push_str(&format!("{v}\n"));
    }
    out.push('\n');
    Ok(out)
}

/// Variant 3: raw arrays staged to the device, result printed from the
/// device view and again after staging out to host storage.
fn device_method(ctx: &DeviceContext) -> Result<String> {
    // Initialization.
    let a = [1, 2, 3, 4, 5];
    let b = [6, 7, 8, 9, 10];
    let mut c = [0i32; SIZE];

    // Stage operands in and allocate the result on the device.
    let a_dev = to_device(&a, ctx)?;
    let b_dev = to_device(&b, ctx)?;
    let mut c_dev = allocate::<i32>(SIZE, ctx)?;

    // Computation.
    add_execute(&a_dev, &b_dev, &mut c_dev, ctx)?;

    let mut out = String::new();

    // Checking interim result through the device buffer.
    for v in to_cpu(&c_dev, ctx)? {
        out.push_str(&format!("{v}\n"));
    }

    // Checking final output from host storage after stage-out.
    c.copy_from_slice(&to_cpu(&c_dev, ctx)?);
    for v in c {
        out.push_str(&format!("{v}\n"));
    }

    out.push('\n');
    Ok(out)
}

/// Variant 4: container-based operands staged to the device.
fn use_device(ctx: &DeviceContext) -> Result<String> {
    let mut out = String::from("UseDevice\n");

    let a = vec![1, 2, 3, 4, 5];
    let b = vec![6, 7, 8, 9, 10];

    let a_dev = to_device(&a, ctx)?;
    let b_dev = to_device(&b, ctx)?;
    let mut c_dev = allocate::<i32>(SIZE, ctx)?;

    add_execute(&a_dev, &b_dev, &mut c_dev, ctx)?;

    // Checking interim result through the device buffer.
    for v in to_cpu(&c_dev, ctx)? {
        out.push_str(&format!("{v}\n"));
    }

    // Checking final output from host storage.
    let c = to_cpu(&c_dev, ctx)?;
    for v in c {
        out.push_str(&format!("{v}\n"));
    }

    out.push('\n');
    Ok(out)
}

/// Variant 5: same as variant 4, but the per-element computation is
/// factored into a reusable kernel function passed to the dispatch.
fn use_device_kernel(ctx: &DeviceContext) -> Result<String> {
    let mut out = String::from("UseDeviceKernel\n");

    let a = vec![1, 2, 3, 4, 5];
    let b = vec![6, 7, 8, 9, 10];

    let a_dev = to_device(&a, ctx)?;
    let b_dev = to_device(&b, ctx)?;
    let mut c_dev = allocate::<i32>(SIZE, ctx)?;

    combine_execute(&a_dev, &b_dev, &mut c_dev, ctx, add_at)?;

    for v in to_cpu(&c_dev, ctx)? {
        out.push_str(&format!("{v}\n"));
    }

    let c = to_cpu(&c_dev, ctx)?;
    for v in c {
        out.push_str(&format!("{v}\n"));
    }

    out.push('\n');
    Ok(out)
}

/// Variant 6: in-place scale of a device-resident mirror, with the
/// mandatory copy back to host storage before reading.
fn use_array(ctx: &DeviceContext) -> Result<String> {
    // Initialization.
    let mut a: Vec<i32> = (0..SIZE as i32).collect();

    // Computation. The staged scope copies the data back to the source.
    with_staged(&mut a, ctx, |buffer, ctx| {
        scale_inplace_execute(buffer, 10, ctx)
    })?;

    let mut out = String::new();
    for v in &a {
        out.push_str(&format!("{v}\n"));
    }
    Ok(out)
}

fn main() -> Result<()> {
    let device = Device::new(0)?;
    let ctx = DeviceContext::new(device)?;

    print!("{}", standard_method());
    print!("{}", cpu_only()?);
    print!("{}", device_method(&ctx)?);
    print!("{}", use_device(&ctx)?);
    print!("{}", use_device_kernel(&ctx)?);
    print!("{}", use_array(&ctx)?);

    Ok(())
}
