use sparkle_suite::aead::{decrypt, encrypt, SchwaemmInstance};

fn hex_to_bytes(s: &str) -> Vec<u8> {
    (0..s.len()).step_by(2).map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap()).collect()
}

const INSTANCES: [SchwaemmInstance; 4] = [
    SchwaemmInstance::Schwaemm128128,
    SchwaemmInstance::Schwaemm192192,
    SchwaemmInstance::Schwaemm256128,
    SchwaemmInstance::Schwaemm256256,
];

#[test]
fn roundtrips_across_instances_and_lengths() {
    for instance in INSTANCES {
        let key = vec![0x42u8; instance.key_bytes()];
        let nonce = vec![0x24u8; instance.nonce_bytes()];

        for pt_len in [0usize, 1, instance.rate_words() * 4 - 1, instance.rate_words() * 4, 100] {
            for ad_len in [0usize, 3, 50] {
                let pt: Vec<u8> = (0..pt_len).map(|i| i as u8).collect();
                let ad: Vec<u8> = (0..ad_len).map(|i| (i * 7) as u8).collect();

                let (ct, tag) = encrypt(instance, &key, &nonce, &ad, &pt).expect("encrypt");
                let recovered = decrypt(instance, &key, &nonce, &ad, &ct, &tag).expect("decrypt");
                assert_eq!(recovered, pt, "{instance:?} pt_len={pt_len} ad_len={ad_len}");
            }
        }
    }
}

#[test]
fn schwaemm256_256_nist_kat_count_1() {
    let instance = SchwaemmInstance::Schwaemm256256;
    let key = hex_to_bytes("000102030405060708090A0B0C0D0E0F101112131415161718191A1B1C1D1E1F");
    let nonce = hex_to_bytes("000102030405060708090A0B0C0D0E0F101112131415161718191A1B1C1D1E1F");

    let (ct, tag) = encrypt(instance, &key, &nonce, &[], &[]).expect("encrypt");
    assert!(ct.is_empty());
    assert_eq!(tag, hex_to_bytes("1E41C39049501061A480341DC8551F3CCE171900EB8F90BA5C54B2A7CC2BFDF2"));
}

#[test]
fn tamper_detection() {
    let instance = SchwaemmInstance::Schwaemm256256;
    let key = vec![1u8; instance.key_bytes()];
    let nonce = vec![2u8; instance.nonce_bytes()];
    let ad = b"header".to_vec();
    let pt = b"the quick brown fox".to_vec();

    let (mut ct, mut tag) = encrypt(instance, &key, &nonce, &ad, &pt).expect("encrypt");

    assert!(decrypt(instance, &key, &nonce, &ad, &ct, &tag).is_ok());

    let saved_byte = ct[0];
    ct[0] ^= 1;
    assert!(decrypt(instance, &key, &nonce, &ad, &ct, &tag).is_err());
    ct[0] = saved_byte;

    tag[0] ^= 1;
    assert!(decrypt(instance, &key, &nonce, &ad, &ct, &tag).is_err());
}
