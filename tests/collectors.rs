#[cfg(test)]
use pretty_assertions::assert_eq;

use std::sync::Arc;
use std::thread;

use linkage::options::MAX_ARITY_CEILING;
use linkage::{Adapter, Linker, LinkerOptions, SynthesisError, Type, Value};

fn boxed(n: usize) -> Vec<Value> {
    (0..n as i32).map(Value::boxed_int).collect()
}

#[test]
fn test_global_linker_is_shared() {
    let a = Linker::global().varargs_array(40).unwrap();
    let b = Linker::global().varargs_array(40).unwrap();
    assert!(Adapter::same(&a, &b));
}

#[test]
fn test_separate_linkers_share_nothing() {
    let a = Linker::new(LinkerOptions::default()).unwrap();
    let b = Linker::new(LinkerOptions::default()).unwrap();
    let x = a.varargs_array(15).unwrap();
    let y = b.varargs_array(15).unwrap();
    assert!(!Adapter::same(&x, &y));
    assert_eq!(x.invoke(&boxed(15)).unwrap(), y.invoke(&boxed(15)).unwrap());
}

#[test]
fn test_twelve_arguments_from_two_threads() {
    let linker = Arc::new(Linker::default());
    let handles: Vec<_> = (0..2)
        .map(|_| {
            let linker = Arc::clone(&linker);
            thread::spawn(move || {
                let collector = linker.varargs_array(12).unwrap();
                let result = collector.invoke(&boxed(12)).unwrap();
                (collector, result.as_array().unwrap().to_vec())
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results[0].1, boxed(12));
    assert_eq!(results[1].1, boxed(12));
    // Whichever thread published first, later requests see the same adapter.
    let cached = linker.varargs_array(12).unwrap();
    assert_eq!(cached.signature(), results[0].0.signature());
    assert_eq!(linker.stats().arrays, 1);
}

#[test]
fn test_concurrent_first_use_of_many_shapes() {
    let linker = Arc::new(Linker::default());
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let linker = Arc::clone(&linker);
            thread::spawn(move || {
                for n in (t..256).step_by(8).rev() {
                    let collector = linker.varargs_array(n).unwrap();
                    let result = collector.invoke(&boxed(n)).unwrap();
                    assert_eq!(result.as_array().unwrap().len(), n);
                    let typed = linker
                        .varargs_typed_array(&Type::array(Type::Str), n % 40)
                        .unwrap();
                    assert_eq!(typed.arity(), n % 40);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(linker.stats().arrays, 256);
    assert_eq!(linker.stats().typed_components, 1);
}

#[test]
fn test_options_validation() {
    assert!(matches!(
        Linker::new(LinkerOptions {
            chunk_size: 0,
            ..LinkerOptions::default()
        }),
        Err(SynthesisError::InvalidOptions(_))
    ));
    assert!(matches!(
        Linker::new(LinkerOptions {
            max_arity: 5,
            chunk_size: 10,
        }),
        Err(SynthesisError::InvalidOptions(_))
    ));

    let beyond_offsets = i32::MAX as usize + 1;
    for max_arity in [usize::MAX, beyond_offsets, 1 << 20, MAX_ARITY_CEILING + 1] {
        let options = LinkerOptions {
            max_arity,
            ..LinkerOptions::default()
        };
        assert!(matches!(
            Linker::new(options.clone()),
            Err(SynthesisError::InvalidOptions(_))
        ));
        assert!(matches!(
            Linker::configure(options),
            Err(SynthesisError::InvalidOptions(_))
        ));
    }

    let ceiling = LinkerOptions {
        max_arity: MAX_ARITY_CEILING,
        ..LinkerOptions::default()
    };
    assert_eq!(ceiling.validate(), Ok(()));
}
