use crate::*;

/// Check that each message is exactly the given bytes, and that an untyped view over those
/// bytes holds the same value.
fn test_equiv<T: MidiBytes>(list: &[(&[u8], T)]) {
    for (raw, msg) in list {
        assert_eq!(msg.msg_bytes(), *raw);
        let view = MsgView::new(*raw);
        assert!(view.has_same_value_as(msg));
        assert_eq!(view.status(), msg.status());
    }
}

fn ch(index: u8) -> Channel {
    Channel::new(index)
}

fn dv(value: u8) -> DataValue {
    DataValue::new(value)
}

fn key(number: u8) -> KeyNumber {
    KeyNumber::new(number)
}

/// Restricted integers and the small value types built on them.
mod primitive {
    use super::*;

    #[test]
    fn data_value_normalized() {
        for v in 0..=127u8 {
            let x = dv(v).to_normalized01::<f64>();
            assert!((0.0..=1.0).contains(&x));
            assert_eq!(DataValue::from_normalized01(v as f64 / 127.0), dv(v));
        }
        assert_eq!(dv(64).to_normalized01::<f32>(), 64.0 / 127.0);
        assert_eq!(DataValue::try_from_normalized01(1.5), None);
        assert_eq!(DataValue::try_from_normalized01(-0.1), None);
    }

    #[test]
    #[should_panic]
    fn data_value_normalized_out_of_range() {
        DataValue::from_normalized01(2.0);
    }

    #[test]
    fn data_value_range() {
        assert_eq!(DataValue::MAX.value(), 127);
        assert_eq!(DataValue::try_from(128), None);
        assert_eq!(DataValue::from_int_lossy(0xC5).value(), 0x45);
        assert!(DataValue::slice_try_from_int(&[0, 1, 127]).is_some());
        assert!(DataValue::slice_try_from_int(&[0, 0x80]).is_none());
    }

    #[test]
    #[should_panic]
    fn data_value_too_big() {
        DataValue::new(128);
    }

    #[test]
    fn double_data_value_halves() {
        for v in 0..=0x3FFFu16 {
            let dd = DoubleDataValue::from_lsb_msb((v & 0x7F) as u8, ((v >> 7) & 0x7F) as u8);
            assert_eq!(dd.value(), v);
            assert_eq!(dd.lsb().value() as u16, v & 0x7F);
            assert_eq!(dd.msb().value() as u16, v >> 7);
        }
        assert_eq!(DoubleDataValue::MIDPOINT.value(), 8192);
        assert_eq!(DoubleDataValue::from(dv(100)).value(), 100);
        assert_eq!(DoubleDataValue::try_from(0x4000), None);
    }

    #[test]
    fn channel() {
        assert_eq!(Channel::all().len(), 16);
        assert_eq!(Channel::all().next(), Some(Channel::first()));
        assert_eq!(Channel::all().next_back(), Some(Channel::last()));
        assert!(Channel::none() < Channel::first());
        assert!(Channel::last() < Channel::omni());
        assert_eq!(Channel::try_new(16), None);
        assert_eq!(Channel::omni().try_index(), None);
        assert_eq!(ch(12).display_number(), 13);
        assert!(ch(3).is_normal() && Channel::none().is_none() && Channel::omni().is_omni());
        assert_eq!(format!("{}", ch(0)), "1");
    }

    #[test]
    #[should_panic]
    fn channel_none_index() {
        Channel::none().index();
    }

    #[test]
    fn key_number_sentinels() {
        let mut k = KeyNumber::last();
        assert_eq!(k.increment(), KeyNumber::none());
        assert_eq!(k.post_decrement(), KeyNumber::none());
        assert_eq!(k, key(127));
        let mut k = KeyNumber::first();
        assert_eq!(k.post_increment(), key(0));
        assert_eq!(k, key(1));
        assert!(KeyNumber::last() < KeyNumber::none());
        assert!(KeyNumber::none() < KeyNumber::all());
        assert_eq!(KeyNumber::normals().count(), 128);
        assert_eq!(KeyNumber::try_new(128), None);
        assert_eq!(KeyNumber::all().try_number(), None);
    }

    #[test]
    #[should_panic]
    fn key_number_increment_none() {
        KeyNumber::none().increment();
    }

    #[test]
    #[should_panic]
    fn key_number_decrement_first() {
        KeyNumber::first().decrement();
    }

    #[test]
    fn preset_number() {
        let mut p = PresetNumber::last();
        assert_eq!(p.increment(), PresetNumber::none());
        assert_eq!(p.decrement(), PresetNumber::new(127));
        assert_eq!(PresetNumber::new(0).display_number(), 1);
        assert_eq!(PresetNumber::normals().len(), 128);
        assert!(PresetNumber::none().try_number().is_none());
    }

    #[test]
    fn control_numbers() {
        for n in 0..=127u8 {
            let control = Control::from_number(dv(n));
            assert_eq!(control.number(), dv(n));
            assert_eq!(Control::from_number(control.number()), control);
            assert_eq!(control.is_channel_mode(), n >= 120);
        }
        assert_eq!(Control::MOD_WHEEL.number().value(), 1);
        assert_eq!(Control::MOD_WHEEL.name(), Some("Modulation Wheel"));
        assert_eq!(Control::from_number(dv(3)).name(), None);
        assert_eq!(Control::MOD_WHEEL.lsb_pair(), Some(Control::MOD_WHEEL_LSB));
        assert_eq!(Control::MOD_WHEEL_LSB.msb_pair(), Some(Control::MOD_WHEEL));
        assert_eq!(Control::POLY_ON.lsb_pair(), None);
    }
}

/// Status bytes and message types.
mod status {
    use super::*;

    #[test]
    fn num_data_bytes() {
        use crate::MsgType::*;
        let table: &[(MsgType, Option<usize>)] = &[
            (NoteOff, Some(2)),
            (NoteOn, Some(2)),
            (PolyKeyPressure, Some(2)),
            (ControlChange, Some(2)),
            (ProgramChange, Some(1)),
            (ChannelPressure, Some(1)),
            (PitchBend, Some(2)),
            (SystemExclusive, None),
            (MtcQuarterFrame, Some(1)),
            (SongPositionPointer, Some(2)),
            (SongSelect, Some(1)),
            (OscillatorTuneRequest, Some(0)),
            (EndOfSystemExclusive, Some(0)),
            (TimingClock, Some(0)),
            (Start, Some(0)),
            (Continue, Some(0)),
            (Stop, Some(0)),
            (ActiveSensing, Some(0)),
            (SystemReset, Some(0)),
        ];
        assert_eq!(table.len(), MsgType::ALL.len());
        for &(ty, count) in table {
            let status = if ty.is_channel_specific() {
                Status::channel_voice(ty, ch(5))
            } else {
                Status::system(ty)
            };
            assert_eq!(status.num_data_bytes(), count, "{:?}", ty);
            assert_eq!(ty.num_data_bytes(), count);
        }
    }

    #[test]
    fn channel_voice_roundtrip() {
        for &ty in MsgType::ALL.iter().filter(|ty| ty.is_channel_voice()) {
            for channel in Channel::all() {
                let status = Status::channel_voice(ty, channel);
                assert_eq!(status.channel(), channel);
                assert_eq!(status.msg_type(), ty);
                assert_eq!(Status::try_from_byte(status.value()), Some(status));
            }
        }
    }

    #[test]
    fn from_byte() {
        for byte in 0..=0xFFu8 {
            let status = Status::try_from_byte(byte);
            match byte {
                0x00..=0x7F | 0xF4 | 0xF5 | 0xF9 | 0xFD => assert_eq!(status, None),
                _ => assert_eq!(status.map(Status::value), Some(byte)),
            }
        }
        assert_eq!(Status::system(MsgType::Start).channel(), Channel::none());
        assert!(MsgType::TimingClock.is_system_realtime());
        assert!(MsgType::SongSelect.is_system_common());
        assert_eq!(MsgType::PitchBend.status_nibble(), 0xE);
    }

    #[test]
    #[should_panic]
    fn channel_voice_with_system_type() {
        Status::channel_voice(MsgType::TimingClock, ch(0));
    }

    #[test]
    #[should_panic]
    fn channel_voice_with_omni() {
        Status::channel_voice(MsgType::NoteOn, Channel::omni());
    }

    #[test]
    #[should_panic]
    fn system_with_channel_type() {
        Status::system(MsgType::NoteOn);
    }
}

/// Owned fixed-size messages and their typed counterparts.
mod owned {
    use super::*;

    #[test]
    fn note_on_velocity_zero() {
        let msg = Msg::<3>::new(
            Status::channel_voice(MsgType::NoteOn, ch(2)),
            dv(69),
            dv(90),
        );
        assert_eq!(msg.bytes(), &[0x92, 0x45, 0x5A]);
        let mut note = msg.to::<NoteMsg>();
        assert!(note.is_note_on());
        note.set_velocity(dv(0));
        assert_eq!(note.msg_bytes()[0], 0x92);
        assert!(note.is_note_off());
        assert_eq!(note.msg_type(), MsgType::NoteOn);
    }

    #[test]
    fn channel_messages() {
        test_equiv(&[
            (
                &[0x80, 0, 63],
                Msg::from(NoteMsg::note_off(ch(0), key(0), dv(63))),
            ),
            (
                &[0x97, 121, 127],
                Msg::from(NoteMsg::note_on(ch(7), key(121), dv(127))),
            ),
            (
                &[0xAA, 127, 0],
                Msg::from(KeyPressureMsg::new(ch(10), key(127), dv(0))),
            ),
            (
                &[0xBC, 0x01, 0x25],
                Msg::from(ControlChangeMsg::new(ch(12), Control::MOD_WHEEL, dv(37))),
            ),
            (
                &[0xE0, 0x0B, 0x77],
                Msg::from(PitchBendMsg::new(ch(0), PitchBend::from_lsb_msb(0x0B, 0x77))),
            ),
            (
                &[0xF2, 0x7F, 0x7F],
                Msg::from(SongPosMsg::new(DoubleDataValue::MAX)),
            ),
        ]);
        test_equiv(&[
            (
                &[0xC7, 121],
                Msg::from(ProgramChangeMsg::new(ch(7), PresetNumber::new(121))),
            ),
            (&[0xDF, 64], Msg::from(ChanPressureMsg::new(ch(15), dv(64)))),
            (
                &[0xF3, 5],
                Msg::from(SongSelectMsg::new(PresetNumber::new(5))),
            ),
            (
                &[0xF1, 0x4B],
                Msg::from(MtcQuarterFrameMsg::new(QuarterFramePiece::MinLowerBits, 0xB)),
            ),
        ]);
        test_equiv(&[(&[0xF8], Msg::timing_clock()), (&[0xF6], Msg::tune_request())]);
    }

    #[test]
    fn system_realtime() {
        let all = [
            Msg::timing_clock(),
            Msg::start(),
            Msg::continue_(),
            Msg::stop(),
            Msg::active_sensing(),
            Msg::system_reset(),
        ];
        for msg in all.iter() {
            assert!(msg.msg_type().is_system_realtime());
            assert_eq!(Msg::<1>::new(msg.status()), *msg);
        }
    }

    #[test]
    fn msg_accessors() {
        let mut msg = Msg::<2>::new(Status::channel_voice(MsgType::ProgramChange, ch(1)), dv(3));
        assert_eq!(msg.data1().value(), 3);
        msg.set_data1(dv(4));
        assert_eq!(msg.bytes(), &[0xC1, 4]);
        let program = msg.to::<ProgramChangeMsg>();
        assert_eq!(program.preset(), PresetNumber::new(4));
        assert_eq!(program.channel(), ch(1));

        let mut msg = Msg::<3>::from_bytes([0xB0, 7, 100]);
        msg.set_data2(dv(101));
        assert_eq!(msg.data2().value(), 101);
        assert!(msg.try_to::<NoteMsg>().is_err());
    }

    #[test]
    fn msg_try_from_bytes() {
        assert!(Msg::try_from_bytes([0x92, 0x80, 0x00]).is_err());
        assert!(Msg::try_from_bytes([0x92, 0x40]).is_err());
        assert!(Msg::try_from_bytes([0xF4]).is_err());
        assert!(Msg::try_from_bytes([0xF0, 0x01, 0xF7]).is_err());
        assert!(Msg::try_from_bytes([0xF0, 0xF7]).is_err());
        assert!(Msg::try_from_bytes([0xF3, 0x01]).is_ok());
        let err = Msg::try_from_bytes([0x45]).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Malformed(_)));
    }

    #[test]
    #[should_panic]
    fn msg_wrong_size() {
        Msg::<2>::new(Status::channel_voice(MsgType::NoteOn, ch(0)), dv(0));
    }

    #[test]
    #[should_panic]
    fn msg_to_wrong_type() {
        Msg::<3>::from_bytes([0xB0, 7, 100]).to::<NoteMsg>();
    }

    #[test]
    fn chan_msg() {
        let note = NoteMsg::note_on(ch(3), key(60), dv(100));
        let mut chan = ChanMsg::from(note);
        assert_eq!(chan.channel(), ch(3));
        assert_eq!(chan.data1().value(), 60);
        assert_eq!(chan.data2().value(), 100);
        chan.set_channel(ch(9));
        chan.set_data2(dv(1));
        assert_eq!(chan.msg_bytes(), &[0x99, 60, 1]);
        assert_eq!(Msg::from(chan).to::<NoteMsg>().channel(), ch(9));

        let pressure = ChanMsg::<[u8; 2]>::new(MsgType::ChannelPressure, ch(0), dv(9));
        assert_eq!(pressure.msg_bytes(), &[0xD0, 9]);
        assert!(ChanMsg::<[u8; 2]>::try_from_bytes([0xF3, 1]).is_err());
    }

    #[test]
    #[should_panic]
    fn chan_msg_data2_on_short_message() {
        ChanMsg::from(ChanPressureMsg::new(ch(0), dv(9))).data2();
    }

    #[test]
    fn note_set_type_keeps_channel() {
        let mut note = NoteMsg::note_on(ch(4), key(60), dv(100));
        note.set_type(MsgType::NoteOff);
        assert_eq!(note.msg_bytes(), &[0x84, 60, 100]);
        assert!(note.is_note_off());
        note.set_channel(ch(0));
        note.set_key(key(61));
        assert_eq!(note.msg_bytes(), &[0x80, 61, 100]);
    }

    #[test]
    #[should_panic]
    fn note_set_type_to_control_change() {
        NoteMsg::note_on(ch(4), key(60), dv(100)).set_type(MsgType::ControlChange);
    }

    #[test]
    #[should_panic]
    fn note_on_omni() {
        NoteMsg::note_on(Channel::omni(), key(60), dv(100));
    }

    #[test]
    #[should_panic]
    fn key_pressure_on_sentinel_key() {
        KeyPressureMsg::new(ch(0), key(60), dv(1)).set_key(KeyNumber::none());
    }

    #[test]
    fn pitch_bend_msg() {
        let mut msg = PitchBendMsg::new(ch(2), PitchBend::midpoint());
        assert_eq!(msg.msg_bytes(), &[0xE2, 0x00, 0x40]);
        msg.set_pitch_bend(PitchBend::max());
        assert_eq!(msg.msg_bytes(), &[0xE2, 0x7F, 0x7F]);
        let raw_zero = PitchBendMsg::from_bytes([0xE0, 0, 0]);
        assert_eq!(raw_zero.pitch_bend(), PitchBend::min());
    }

    #[test]
    fn control_change_accessors() {
        let mut cc = ControlChangeMsg::new(ch(0), Control::SUSTAIN, dv(127));
        assert_eq!(cc.control(), Control::DAMPER_PEDAL);
        cc.set_control(Control::CHANNEL_VOLUME);
        cc.set_value(dv(80));
        assert_eq!(cc.msg_bytes(), &[0xB0, 7, 80]);
        assert_eq!(format!("{:?}", cc), "ControlChangeMsg[B0 07 50]");
    }
}

/// Untyped and typed references over caller-owned bytes.
mod reference {
    use super::*;

    #[test]
    fn control_change_scenario() {
        let mut bytes = [0xBC, 0x01, 0x25];
        {
            let view = MsgView::new(&bytes[..]);
            assert_eq!(view.channel(), ch(12));
            let cc: ControlChangeMsgView = view.view_as();
            assert_eq!(cc.control(), Control::MOD_WHEEL);
            assert_eq!(cc.value().value(), 37);
            let err = view.try_view_as::<NoteMsgView>().unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::Mismatch(_)));
        }
        {
            let mut msg = MsgRef::new(&mut bytes[..]);
            let mut cc: ControlChangeMsgRef = msg.ref_as();
            cc.set_value(dv(126));
        }
        assert_eq!(bytes, [0xBC, 0x01, 0x7E]);
    }

    #[test]
    #[should_panic]
    fn view_as_wrong_type() {
        let bytes = [0xBC, 0x01, 0x25];
        let view = MsgView::new(&bytes[..]);
        let _note: NoteMsgView = view.view_as();
    }

    #[test]
    fn malformed() {
        let cases: &[&[u8]] = &[
            &[],
            &[0x45, 0x01],
            &[0x90, 0x40],
            &[0x90, 0x40, 0x40, 0x40],
            &[0x90, 0x40, 0xC0],
            &[0xF4],
            &[0xF0, 0x01, 0x02],
            &[0xF0],
        ];
        for &bytes in cases {
            let err = MsgView::try_new(bytes).unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::Malformed(_)), "{:02X?}", bytes);
            assert!(format!("{}", err).starts_with("malformed midi message"));
        }
    }

    #[test]
    #[should_panic]
    fn new_over_partial_message() {
        MsgView::new(&[0x90, 0x40][..]);
    }

    #[test]
    fn data_bytes() {
        let bytes = [0xC3, 0x10];
        let view = MsgView::new(&bytes[..]);
        assert_eq!(view.num_data_bytes(), 1);
        assert_eq!(view.data1().value(), 0x10);
        assert!(!view.is_sys_ex());

        let mut bytes = [0xE0, 0x00, 0x40];
        let mut msg = MsgRef::new(&mut bytes[..]);
        msg.set_data1(dv(1));
        msg.set_data2(dv(2));
        assert_eq!(msg.data2().value(), 2);
        assert_eq!(bytes, [0xE0, 1, 2]);
    }

    #[test]
    #[should_panic]
    fn data2_on_short_message() {
        MsgView::new(&[0xC3, 0x10][..]).data2();
    }

    #[test]
    #[should_panic]
    fn data1_on_sysex() {
        MsgView::new(&[0xF0, 0x7D, 0x01, 0xF7][..]).data1();
    }

    #[test]
    fn upcasts() {
        let mut bytes = [0x90, 60, 100];
        let mut msg = MsgRef::new(&mut bytes[..]);
        let mut note: NoteMsgRef = msg.ref_as();
        note.set_key(key(62));
        let chan_ref = ChanMsg::from(note.view_mut());
        assert_eq!(chan_ref.data1().value(), 62);
        let as_view = NoteMsgView::from(note);
        assert_eq!(as_view.key(), key(62));
        let untyped = MsgView::from(as_view);
        assert_eq!(untyped.bytes(), &[0x90, 62, 100]);
    }

    #[test]
    fn same_value_across_storage() {
        let owned = NoteMsg::note_on(ch(1), key(40), dv(50));
        let bytes = [0x91, 40, 50];
        let view = NoteMsgView::from_bytes(&bytes[..]);
        assert!(owned.has_same_value_as(&view));
        assert!(view.has_same_value_as(&Msg::from(owned)));
        assert_eq!(view.to_owned_msg(), owned);
        assert_eq!(owned.view(), view);
    }

    #[test]
    fn ref_into_owned_msg() {
        let mut msg = Msg::<3>::from_bytes([0x90, 60, 100]);
        {
            let mut note: NoteMsgRef = msg.ref_as();
            note.set_key(key(72));
        }
        assert_eq!(msg.data1().value(), 72);
        let view: NoteMsgView = msg.view_as();
        assert_eq!(view.velocity().value(), 100);
        assert!(msg.try_ref_as::<PitchBendMsgRef>().is_err());
    }

    #[test]
    fn classify() {
        let cases: &[(&[u8], &str)] = &[
            (&[0x80, 1, 2], "note"),
            (&[0xA0, 1, 2], "key pressure"),
            (&[0xB0, 1, 2], "control change"),
            (&[0xC0, 1], "program change"),
            (&[0xD0, 1], "channel pressure"),
            (&[0xE0, 1, 2], "pitch bend"),
            (&[0xF1, 0x12], "quarter frame"),
            (&[0xF2, 1, 2], "song position"),
            (&[0xF3, 1], "song select"),
            (&[0xF0, 0x41, 0x10, 0xF7], "manufacturer sysex"),
            (&[0xF0, 0x7E, 0x16, 0x7F, 0x3D, 0xF7], "universal sysex"),
            (&[0xF0, 0xF7], "other"),
            (&[0xF0, 0x7E, 0x16, 0xF7], "other"),
            (&[0xF8], "other"),
            (&[0xF6], "other"),
        ];
        for &(bytes, expected) in cases {
            let kind = match MsgView::new(bytes).classify() {
                AnyMsg::Note(_) => "note",
                AnyMsg::KeyPressure(_) => "key pressure",
                AnyMsg::ControlChange(_) => "control change",
                AnyMsg::ProgramChange(_) => "program change",
                AnyMsg::ChanPressure(_) => "channel pressure",
                AnyMsg::PitchBend(_) => "pitch bend",
                AnyMsg::MtcQuarterFrame(_) => "quarter frame",
                AnyMsg::SongPos(_) => "song position",
                AnyMsg::SongSelect(_) => "song select",
                AnyMsg::MfrSysEx(_) => "manufacturer sysex",
                AnyMsg::UniversalSysEx(_) => "universal sysex",
                AnyMsg::Other(_) => "other",
            };
            assert_eq!(kind, expected, "{:02X?}", bytes);
        }
    }

    #[test]
    fn classify_ref_allows_mutation() {
        let mut bytes = [0xF3, 1];
        if let AnyMsg::SongSelect(mut song) = MsgRef::new(&mut bytes[..]).classify() {
            song.set_song(PresetNumber::new(9));
        } else {
            panic!("not classified as song select");
        }
        assert_eq!(bytes, [0xF3, 9]);
    }

    #[test]
    fn mutable_reborrow_keeps_status() {
        let mut note = NoteMsg::note_on(ch(2), key(69), dv(90));
        assert_eq!(note.msg_ref().into_inner(), &[0x92, 0x45, 0x5A]);
        assert_eq!(note.view_mut().into_inner(), &[0x92, 0x45, 0x5A]);
        note.msg_ref().set_data2(dv(0));
        assert_eq!(note.msg_type(), MsgType::NoteOn);
        assert!(note.is_note_off());
        let owned: [u8; 3] = note.into_inner();
        assert_eq!(owned, [0x92, 0x45, 0x00]);
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn heap_sysex_keeps_manufacturer() {
        let mut mfr = MfrSysExBuilder::new(Manufacturer::ROLAND)
            .with_num_payload_bytes(2)
            .build_on_heap();
        mfr.view_mut().raw_payload_bytes_mut().copy_from_slice(&[0x7E, 0x7F]);
        assert_eq!(mfr.view_mut().into_inner(), &[0xF0, 0x41, 0x7E, 0x7F, 0xF7]);
        assert_eq!(mfr.manufacturer(), Manufacturer::ROLAND);
        assert!(mfr.msg_ref().try_ref_as::<UniversalSysExMsgRef>().is_err());
        let bytes: Vec<u8> = mfr.into_inner();
        assert_eq!(bytes, [0xF0, 0x41, 0x7E, 0x7F, 0xF7]);
    }
}

/// System Exclusive messages and builders.
mod sysex {
    use super::*;

    #[test]
    fn universal_ack() {
        let builder = UniversalSysExBuilder::new(Device::new(0x16), UniversalType::ACK)
            .with_num_payload_bytes(1);
        assert_eq!(builder.num_msg_bytes_including_eox(), 6);
        let mut bytes = [0xFF; 6];
        {
            let mut ack = builder.build_as_ref_to_bytes(&mut bytes);
            assert_eq!(ack.raw_payload_bytes(), &[0]);
            ack.raw_payload_bytes_mut()[0] = 61;
        }
        assert_eq!(bytes, [0xF0, 0x7E, 0x16, 0x7F, 0x3D, 0xF7]);

        let view = MsgView::new(&bytes[..]);
        let ack: UniversalSysExMsgView = view.view_as();
        assert_eq!(ack.category(), UniversalCategory::NonRealTime);
        assert_eq!(ack.universal_type(), UniversalType::ACK);
        assert_eq!(ack.device(), Device::new(0x16));
        assert_eq!(ack.raw_payload_bytes(), &[0x3D]);
        assert_eq!(ack.num_header_bytes(), 4);
        assert_eq!(ack.sys_ex_id(), 0x7E);
        assert!(ack.is_universal());
    }

    #[test]
    fn non_commercial() {
        let bytes = [0xF0, 0x7D, 0xA0, 0xA1, 0xA2, 0xF7];
        let msg = MfrSysExMsgView::from_bytes(&bytes[..]);
        assert_eq!(msg.manufacturer(), Manufacturer::NON_COMMERCIAL);
        assert!(msg.manufacturer().is_non_commercial());
        assert_eq!(msg.raw_payload_bytes().as_ptr(), bytes[2..].as_ptr());
        assert_eq!(msg.num_payload_bytes(), 3);
        assert_eq!(msg.num_header_bytes(), 2);
        assert!(!msg.is_universal());
    }

    #[test]
    fn non_commercial_built() {
        let mut bytes = [0; 6];
        {
            let mut msg = MfrSysExBuilder::new(Manufacturer::NON_COMMERCIAL)
                .with_num_payload_bytes(3)
                .build_as_ref_to_bytes(&mut bytes);
            msg.raw_payload_bytes_mut()
                .copy_from_slice(&[0x20, 0x21, 0x22]);
        }
        assert_eq!(bytes, [0xF0, 0x7D, 0x20, 0x21, 0x22, 0xF7]);
    }

    #[test]
    fn extended_manufacturer() {
        let mut bytes = [0; 7];
        let msg = MfrSysExBuilder::new(Manufacturer::ARTURIA)
            .with_num_payload_bytes(2)
            .build_as_ref_to_bytes(&mut bytes);
        assert_eq!(msg.num_header_bytes(), 4);
        assert_eq!(msg.sys_ex_id(), 0x00);
        assert_eq!(msg.manufacturer(), Manufacturer::ARTURIA);
        assert!(msg.manufacturer().is_extended());
        assert_eq!(msg.msg_bytes(), &[0xF0, 0x00, 0x20, 0x6B, 0, 0, 0xF7]);
    }

    #[test]
    fn manufacturer_ids() {
        assert_eq!(Manufacturer::from_id_bytes(&[0x41, 0x10]), Some(Manufacturer::ROLAND));
        assert_eq!(
            Manufacturer::from_id_bytes(&[0x00, 0x21, 0x09]),
            Some(Manufacturer::NATIVE_INSTRUMENTS)
        );
        assert_eq!(Manufacturer::from_id_bytes(&[0x00, 0x21]), None);
        assert_eq!(Manufacturer::from_id_bytes(&[0x7E, 0x00]), None);
        assert_eq!(Manufacturer::from_id_bytes(&[]), None);
        assert_eq!(Manufacturer::try_short(0x7F), None);
        assert_eq!(Manufacturer::short(0x43), Manufacturer::YAMAHA);
        assert_eq!(Manufacturer::extended(dv(0x20), dv(0x3C)), Manufacturer::ELEKTRON);
        assert_eq!(Manufacturer::ALESIS.num_id_bytes(), 3);
    }

    #[test]
    fn sub_id2_table() {
        use crate::UniversalCategory::*;
        assert!(!type_has_sub_id2(NonRealTime, 0x7F));
        assert!(!type_has_sub_id2(NonRealTime, 0x01));
        assert!(type_has_sub_id2(NonRealTime, 0x06));
        assert!(type_has_sub_id2(NonRealTime, 0x09));
        assert!(type_has_sub_id2(RealTime, 0x01));
        assert!(type_has_sub_id2(RealTime, 0x04));
        assert!(!type_has_sub_id2(RealTime, 0x06));
        assert!(!type_has_sub_id2(RealTime, 0x07));
        assert_eq!(UniversalType::try_new(NonRealTime, 0x06, None), None);
        assert_eq!(UniversalType::try_new(NonRealTime, 0x7F, Some(1)), None);
        assert_eq!(
            UniversalType::try_new(RealTime, 0x04, Some(0x01)),
            Some(UniversalType::MASTER_VOLUME)
        );
        assert_eq!(UniversalType::GM_SYSTEM_ON.num_id_bytes(), 4);
        assert_eq!(UniversalType::NAK.num_id_bytes(), 3);
    }

    #[test]
    fn universal_with_sub_id2() {
        let bytes = [0xF0, 0x7F, 0x7F, 0x04, 0x01, 0x00, 0x60, 0xF7];
        let msg = UniversalSysExMsgView::from_bytes(&bytes[..]);
        assert_eq!(msg.universal_type(), UniversalType::MASTER_VOLUME);
        assert_eq!(msg.category(), UniversalCategory::RealTime);
        assert!(msg.device().is_all());
        assert_eq!(msg.num_header_bytes(), 5);
        assert_eq!(msg.raw_payload_bytes(), &[0x00, 0x60]);

        let identity = [0xF0, 0x7E, 0x00, 0x06, 0x01, 0xF7];
        let msg = UniversalSysExMsgView::from_bytes(&identity[..]);
        assert_eq!(msg.universal_type(), UniversalType::IDENTITY_REQUEST);
        assert_eq!(msg.num_payload_bytes(), 0);

        // Truncated before sub-ID#2.
        let truncated = [0xF0, 0x7E, 0x00, 0x06, 0xF7];
        assert!(UniversalSysExMsgView::try_from_bytes(&truncated[..]).is_err());
    }

    #[test]
    fn set_device() {
        let mut bytes = [0xF0, 0x7E, 0x16, 0x7F, 0x3D, 0xF7];
        let mut msg = UniversalSysExMsgRef::from_bytes(&mut bytes[..]);
        msg.set_device(Device::ALL);
        assert_eq!(msg.device(), Device::ALL);
        assert_eq!(bytes, [0xF0, 0x7E, 0x7F, 0x7F, 0x3D, 0xF7]);
    }

    #[test]
    fn generic_sysex() {
        let bytes = [0xF0, 0x41, 0x10, 0xF7];
        let mfr = MfrSysExMsgView::from_bytes(&bytes[..]);
        let sysex = SysExMsg::from(mfr);
        assert_eq!(sysex.sys_ex_id(), Some(0x41));
        assert!(!sysex.is_universal());
        assert_eq!(sysex.data_bytes(), &[0x41, 0x10]);

        let empty = [0xF0, 0xF7];
        let sysex = SysExMsgView::from_bytes(&empty[..]);
        assert_eq!(sysex.sys_ex_id(), None);
        assert!(MfrSysExMsgView::try_from_bytes(&empty[..]).is_err());
        assert!(UniversalSysExMsgView::try_from_bytes(&empty[..]).is_err());
        assert!(SysExMsgView::try_from_bytes(&[0x90, 1, 2][..]).is_err());
    }

    #[test]
    #[should_panic]
    fn builder_buffer_size() {
        let mut bytes = [0; 5];
        MfrSysExBuilder::new(Manufacturer::KORG)
            .with_num_payload_bytes(3)
            .build_as_ref_to_bytes(&mut bytes);
    }

    #[test]
    #[should_panic]
    fn builder_empty_payload() {
        MfrSysExBuilder::new(Manufacturer::KORG).with_num_payload_bytes(0);
    }

    #[test]
    #[should_panic]
    fn builder_without_payload_size() {
        let mut bytes = [0; 2];
        MfrSysExBuilder::new(Manufacturer::KORG).build_as_ref_to_bytes(&mut bytes);
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn heap() {
        let mut msg = UniversalSysExBuilder::new(Device::new(3), UniversalType::GM_SYSTEM_ON)
            .with_num_payload_bytes(1)
            .build_on_heap();
        assert_eq!(msg.msg_bytes(), &[0xF0, 0x7E, 0x03, 0x09, 0x01, 0x00, 0xF7]);
        msg.raw_payload_bytes_mut()[0] = 0x7F;
        let copy = msg.view().to_owned_msg();
        assert_eq!(copy, msg);
        assert_eq!(copy.into_inner().len(), 7);

        let mfr = MfrSysExBuilder::new(Manufacturer::ROLAND)
            .with_num_payload_bytes(2)
            .build_on_heap();
        assert_eq!(mfr.msg_bytes(), &[0xF0, 0x41, 0, 0, 0xF7]);
        let as_view: MfrSysExMsgView = mfr.view_as();
        assert_eq!(as_view, mfr.view());
    }
}

/// Pitch bend values and ranges.
mod pitch {
    use super::*;

    #[test]
    fn from_lsb_msb() {
        let bend = PitchBend::from_lsb_msb(0x0B, 0x77);
        assert_eq!(bend.value().value(), 15243);
        assert_eq!(bend.lsb().value(), 0x0B);
        assert_eq!(bend.msb().value(), 0x77);
        let semitones = bend.semitones_within(PitchBendRange::default());
        assert!((semitones - 7051.0 * 2.0 / 8191.0).abs() < 1e-9);
        assert!((semitones - 1.71989).abs() < 0.005);
    }

    #[test]
    fn raw_zero() {
        assert_eq!(PitchBend::from_lsb_msb(0, 0), PitchBend::min());
        assert_eq!(PitchBend::new(DoubleDataValue::MIN), PitchBend::min());
        assert_eq!(PitchBend::min().value().value(), 1);
        assert_eq!(PitchBend::max().value().value(), 16383);
        assert_eq!(PitchBend::default(), PitchBend::midpoint());
    }

    #[test]
    fn semitone_roundtrip() {
        let ranges = [
            PitchBendRange::default(),
            PitchBendRange::symmetrical(12.0),
            PitchBendRange::asymmetrical(12.0, 2.0),
            PitchBendRange::asymmetrical(0.5, 24.0),
        ];
        for range in ranges.iter() {
            for raw in 1..=16383u16 {
                let bend = PitchBend::new(DoubleDataValue::new(raw));
                let back = PitchBend::semitone_bend(bend.semitones_within(*range), *range);
                let diff = (back.value().value() as i32 - raw as i32).abs();
                assert!(diff <= 1, "{} came back as {:?}", raw, back);
            }
        }
    }

    #[test]
    fn semitone_bend() {
        let range = PitchBendRange::asymmetrical(12.0, 2.0);
        assert_eq!(PitchBend::semitone_bend(0.0, range), PitchBend::midpoint());
        assert_eq!(PitchBend::semitone_bend(2.0, range), PitchBend::max());
        assert_eq!(PitchBend::semitone_bend(5.0, range), PitchBend::max());
        assert_eq!(PitchBend::semitone_bend(-12.0, range), PitchBend::min());
        assert_eq!(PitchBend::semitone_bend(-13.0, range), PitchBend::min());
        assert_eq!(
            PitchBend::semitone_bend(1.0, range).value().value(),
            8192 + 4096
        );

        let up_only = PitchBendRange::asymmetrical(0.0, 2.0);
        assert_eq!(PitchBend::semitone_bend(-0.1, up_only), PitchBend::min());
        assert_eq!(PitchBend::semitone_bend(0.0, up_only), PitchBend::midpoint());
        assert_eq!(PitchBend::min().semitones_within(up_only), 0.0);

        let down_only = PitchBendRange::asymmetrical(2.0, 0.0);
        assert_eq!(PitchBend::semitone_bend(0.0, down_only), PitchBend::midpoint());
        assert_eq!(PitchBend::semitone_bend(0.1, down_only), PitchBend::max());
        let none = PitchBendRange::symmetrical(0.0);
        assert_eq!(PitchBend::semitone_bend(0.0, none), PitchBend::midpoint());
    }

    #[test]
    fn can_bend() {
        let range = PitchBendRange::asymmetrical(12.0, 2.0);
        assert!(range.can_bend_by_semitones(-12.0));
        assert!(!range.can_bend_by_semitones(-12.5));
        assert!(range.can_bend_by_semitones(2.0));
        assert!(!range.can_bend_by_semitones(2.5));
        assert_eq!(range.max_down(), 12.0);
        assert_eq!(range.max_up(), 2.0);
    }

    #[test]
    #[should_panic]
    fn negative_range() {
        PitchBendRange::asymmetrical(-1.0, 2.0);
    }
}

/// MIDI Time Code frames and quarter frames.
mod mtc {
    use super::*;

    fn pieces_in_order(frame: &MtcFullFrame, order: &[QuarterFramePiece], start: MtcFullFrame) {
        let mut received = start;
        for &piece in order {
            received
                .set_piece_from_quarter_frame_data_byte(frame.quarter_frame_data_byte_for(piece));
        }
        assert_eq!(received, *frame);
    }

    #[test]
    fn quarter_frames_25fps() {
        let frame = MtcFullFrame::new(MtcRate::Fps25NonDrop, 23, 59, 7, 24);
        assert!(frame.is_valid());
        let byte = |piece| frame.quarter_frame_data_byte_for(piece).value();
        assert_eq!(byte(QuarterFramePiece::MinLowerBits), 0x4B);
        assert_eq!(byte(QuarterFramePiece::RateHourUpperBits), 0x73);
        assert_eq!(byte(QuarterFramePiece::FrameLowerBits), 0x08);
        assert_eq!(byte(QuarterFramePiece::FrameUpperBit), 0x11);
        assert_eq!(byte(QuarterFramePiece::SecLowerBits), 0x27);
        assert_eq!(byte(QuarterFramePiece::SecUpperBits), 0x30);
        assert_eq!(byte(QuarterFramePiece::MinUpperBits), 0x53);
        assert_eq!(byte(QuarterFramePiece::HourLowerBits), 0x67);
        assert_eq!(format!("{}", frame), "23:59:07:24");
    }

    #[test]
    fn quarter_frame_roundtrip() {
        let forward = QuarterFramePiece::ALL;
        let mut backward = QuarterFramePiece::ALL;
        backward.reverse();
        let shuffled = [
            QuarterFramePiece::HourLowerBits,
            QuarterFramePiece::FrameUpperBit,
            QuarterFramePiece::MinUpperBits,
            QuarterFramePiece::SecLowerBits,
            QuarterFramePiece::RateHourUpperBits,
            QuarterFramePiece::FrameLowerBits,
            QuarterFramePiece::MinLowerBits,
            QuarterFramePiece::SecUpperBits,
        ];
        let garbage = MtcFullFrame::from_packed_bytes([0xFF; 4]);
        for code in 0..4 {
            let rate = MtcRate::from_code(code);
            for &hh in &[0, 1, 15, 16, 23] {
                for mm in (0..60).step_by(7) {
                    for ss in (0..60).step_by(11) {
                        for ff in 0..=rate.max_frame() {
                            let frame = MtcFullFrame::new(rate, hh, mm, ss, ff);
                            if !frame.is_valid() {
                                continue;
                            }
                            for order in [&forward, &backward, &shuffled].iter() {
                                pieces_in_order(&frame, &order[..], MtcFullFrame::default());
                                pieces_in_order(&frame, &order[..], garbage);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn drop_frames() {
        for code in 0..4 {
            let rate = MtcRate::from_code(code);
            for mm in 0..60 {
                for ss in 0..60 {
                    for ff in 0..30 {
                        let expected = rate == MtcRate::Fps29_97Drop
                            && ss == 0
                            && mm % 10 != 0
                            && (ff == 0 || ff == 1);
                        assert_eq!(MtcFullFrame::is_drop_frame(rate, mm, ss, ff), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn validity() {
        assert!(!MtcFullFrame::new(MtcRate::Fps24NonDrop, 0, 0, 0, 24).is_valid());
        assert!(MtcFullFrame::new(MtcRate::Fps24NonDrop, 0, 0, 0, 23).is_valid());
        assert!(!MtcFullFrame::new(MtcRate::Fps25NonDrop, 0, 0, 0, 25).is_valid());
        assert!(MtcFullFrame::new(MtcRate::Fps30NonDrop, 0, 1, 0, 0).is_valid());
        assert!(!MtcFullFrame::new(MtcRate::Fps29_97Drop, 0, 1, 0, 0).is_valid());
        assert!(!MtcFullFrame::new(MtcRate::Fps29_97Drop, 0, 1, 0, 1).is_valid());
        assert!(MtcFullFrame::new(MtcRate::Fps29_97Drop, 0, 1, 0, 2).is_valid());
        assert!(MtcFullFrame::new(MtcRate::Fps29_97Drop, 0, 10, 0, 0).is_valid());
        assert!(!MtcFullFrame::from_packed_bytes([24, 0, 0, 0]).is_valid());
        assert!(!MtcFullFrame::from_packed_bytes([0, 60, 0, 0]).is_valid());
        assert_eq!(MtcFullFrame::max_frame(MtcRate::Fps25NonDrop), 24);
    }

    #[test]
    fn lazy_frame_limit() {
        let mut frame = MtcFullFrame::new(MtcRate::Fps24NonDrop, 0, 0, 0, 0);
        frame.set_ff(29);
        assert_eq!(frame.ff(), 29);
        assert!(!frame.is_valid());
        frame.set_rate(MtcRate::Fps30NonDrop);
        assert!(frame.is_valid());
        assert_eq!(frame.ff(), 29);
    }

    #[test]
    #[should_panic]
    fn frame_out_of_range() {
        MtcFullFrame::default().set_ff(30);
    }

    #[test]
    #[should_panic]
    fn hour_out_of_range() {
        MtcFullFrame::default().set_hh(24);
    }

    #[test]
    fn total_frames() {
        let frame = MtcFullFrame::new(MtcRate::Fps29_97Drop, 0, 1, 0, 2);
        assert_eq!(frame.total_frames(), 1800);
        let frame = MtcFullFrame::new(MtcRate::Fps29_97Drop, 0, 10, 0, 0);
        assert_eq!(frame.total_frames(), 17982);
        let frame = MtcFullFrame::new(MtcRate::Fps25NonDrop, 1, 0, 0, 0);
        assert_eq!(frame.total_frames(), 90000);
        assert_eq!(frame.as_seconds(), 3600.0);
        assert_eq!(frame.frames_per_second(), 25.0);
    }

    #[test]
    fn quarter_frame_msg() {
        let frame = MtcFullFrame::new(MtcRate::Fps25NonDrop, 23, 59, 7, 24);
        let mut msg = MtcQuarterFrameMsg::piece_of(&frame, QuarterFramePiece::MinLowerBits);
        assert_eq!(msg.msg_bytes(), &[0xF1, 0x4B]);
        assert_eq!(msg.piece(), QuarterFramePiece::MinLowerBits);
        assert_eq!(msg.value_in_lower_4_bits(), 0xB);
        msg.set_piece(QuarterFramePiece::SecLowerBits);
        assert_eq!(msg.data_byte().value(), 0x2B);
        msg.set_value_from_lower_4_bits(0xF3);
        assert_eq!(msg.data_byte().value(), 0x23);
        msg.set_data_byte(dv(0x73));
        assert_eq!(msg.piece(), QuarterFramePiece::RateHourUpperBits);

        let mut received = MtcFullFrame::default();
        for &piece in QuarterFramePiece::ALL.iter() {
            let msg = MtcQuarterFrameMsg::piece_of(&frame, piece);
            received.set_piece_from_quarter_frame_data_byte(msg.data_byte());
        }
        assert_eq!(received, frame);
    }

    #[test]
    #[should_panic]
    fn quarter_frame_value_too_big() {
        MtcQuarterFrameMsg::new(QuarterFramePiece::FrameLowerBits, 0x10);
    }

    #[test]
    fn full_message() {
        let frame = MtcFullFrame::new(MtcRate::Fps25NonDrop, 23, 59, 7, 24);
        let mut bytes = [0; MtcFullFrame::FULL_MESSAGE_LEN];
        {
            let msg = frame.write_full_message(Device::ALL, &mut bytes);
            assert_eq!(MtcFullFrame::from_full_message(&msg), frame);
        }
        assert_eq!(
            bytes,
            [0xF0, 0x7F, 0x7F, 0x01, 0x01, 0x37, 0x3B, 0x07, 0x18, 0xF7]
        );

        let ack = [0xF0, 0x7E, 0x16, 0x7F, 0x3D, 0xF7];
        let ack = UniversalSysExMsgView::from_bytes(&ack[..]);
        let err = MtcFullFrame::try_from_full_message(&ack).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Mismatch(_)));

        let short = [0xF0, 0x7F, 0x7F, 0x01, 0x01, 0x37, 0xF7];
        let short = UniversalSysExMsgView::from_bytes(&short[..]);
        assert!(MtcFullFrame::try_from_full_message(&short).is_err());
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn full_message_on_heap() {
        let frame = MtcFullFrame::new(MtcRate::Fps29_97Drop, 1, 2, 3, 4);
        let msg = frame.to_full_message(Device::new(5));
        assert_eq!(msg.msg_bytes(), &[0xF0, 0x7F, 0x05, 0x01, 0x01, 0x41, 2, 3, 4, 0xF7]);
        assert_eq!(MtcFullFrame::from_full_message(&msg), frame);
    }
}

/// System Common messages with data bytes.
mod system {
    use super::*;

    #[test]
    fn song_position() {
        let mut msg = SongPosMsg::new(DoubleDataValue::new(0x1234));
        assert_eq!(msg.msg_bytes(), &[0xF2, 0x34, 0x24]);
        assert_eq!(msg.sixteenths_after_start().value(), 0x1234);
        msg.set_sixteenths_after_start(DoubleDataValue::MIDPOINT);
        assert_eq!(msg.msg_bytes(), &[0xF2, 0x00, 0x40]);
    }

    #[test]
    fn song_select() {
        let mut bytes = [0xF3, 0x05];
        let mut msg = SongSelectMsgRef::from_bytes(&mut bytes[..]);
        assert_eq!(msg.song(), PresetNumber::new(5));
        msg.set_song(PresetNumber::new(6));
        assert_eq!(bytes, [0xF3, 0x06]);
    }

    #[test]
    #[should_panic]
    fn song_select_sentinel() {
        SongSelectMsg::new(PresetNumber::none());
    }
}

/// Timestamped values.
mod timed {
    use super::*;

    #[test]
    fn refinement_keeps_time() {
        let bytes = [0x92, 0x45, 0x5A];
        let timed = Timed::new(2.25, MsgView::new(&bytes[..]));
        let note: Timed<NoteMsgView> = timed.view_as();
        assert_eq!(note.time, 2.25);
        assert_eq!(note.value.key(), key(69));
        assert!(timed.try_view_as::<PitchBendMsgView>().is_err());
        assert_eq!(timed.as_view().value.bytes(), &bytes);
    }

    #[test]
    fn ref_as_mutates() {
        let mut timed = Timed::new(1.0, NoteMsg::note_on(ch(0), key(60), dv(1)));
        {
            let mut note: Timed<NoteMsgRef> = timed.ref_as();
            note.value.set_velocity(dv(0));
            assert_eq!(note.time(), 1.0);
        }
        assert!(timed.value.is_note_off());
        assert_eq!(timed.msg_ref().value.bytes(), &[0x90, 60, 0]);
    }

    #[test]
    fn map() {
        let timed = Timed::from((0.5, [0xF8u8]));
        let msg = timed.map(Msg::from_bytes);
        assert_eq!(msg.value, Msg::timing_clock());
        assert_eq!(msg.time, 0.5);
        let failed = Timed::new(0.5, [0x90u8]).try_map(Msg::try_from_bytes);
        assert!(failed.is_err());
        let later = Timed::new(1.0, ());
        assert_eq!(msg.cmp_time(&later), core::cmp::Ordering::Less);
        assert_eq!(msg.as_ref().value, &Msg::timing_clock());
        assert_eq!(msg.into_value(), Msg::timing_clock());
    }
}

/// Writing messages into output sinks.
mod error {
    use super::*;

    #[test]
    fn malformed_reference() {
        let err = MsgView::try_new(&[0x90][..]).unwrap_err();
        assert!(err.kind().is_malformed());
        assert_eq!(
            err.to_string(),
            "malformed midi message: invalid message reference"
        );
        #[cfg(all(debug_assertions, feature = "alloc"))]
        {
            let cause = err.source().unwrap();
            assert_eq!(
                cause.kind(),
                ErrorKind::Malformed("data byte count does not match the status")
            );
            assert!(format!("{:?}", err).contains("caused by"));
        }
    }

    #[test]
    fn mismatched_refinement() {
        let bytes = [0xB0, 0x07, 0x50];
        let view = MsgView::new(&bytes[..]);
        let err = view.try_view_as::<NoteMsgView>().unwrap_err();
        assert!(err.kind().is_mismatch());
        assert!(!err.kind().is_malformed());
        assert!(err.to_string().starts_with("mismatched midi message: "));
    }

    #[test]
    fn empty_and_unknown_status() {
        let err = MsgView::try_new(&[0u8; 0][..]).unwrap_err();
        assert!(err.kind().is_malformed());
        let err = MsgView::try_new(&[0xF4][..]).unwrap_err();
        assert!(err.kind().is_malformed());
    }
}

mod io {
    use super::*;
    use crate::io::{Cursor, CursorError};

    #[test]
    fn write_slices() {
        let note = NoteMsg::note_on(ch(2), key(69), dv(90));
        let mut buf = [0; 4];
        let mut out = &mut buf[..];
        note.write(&mut out).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(note.write(&mut out), Err(CursorError::OutOfSpace));
        assert_eq!(buf, [0x92, 0x45, 0x5A, 0x92]);

        let mut buf = [0; 8];
        let mut cursor = Cursor::new(&mut buf);
        note.write(&mut cursor).unwrap();
        Msg::timing_clock().write(&mut cursor).unwrap();
        assert_eq!(cursor.written(), &[0x92, 0x45, 0x5A, 0xF8]);
        assert_eq!(cursor.remaining(), 4);
        assert_eq!(note.write(&mut cursor), Ok(()));
        assert_eq!(Msg::start().write(&mut cursor), Ok(()));
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(note.write(&mut cursor), Err(CursorError::OutOfSpace));
        let (buf, len) = cursor.into_inner();
        assert_eq!(len, 8);
        assert_eq!(buf, &[0x92, 0x45, 0x5A, 0xF8, 0x92, 0x45, 0x5A, 0xFA]);

        let mut buf = [0; 2];
        let mut cursor = Cursor::new(&mut buf);
        assert_eq!(note.write(&mut cursor), Err(CursorError::OutOfSpace));
        assert_eq!(cursor.written(), &[0x92, 0x45]);
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn write_vec() {
        let mut out = Vec::new();
        let bytes = [0xF0, 0x7D, 0x01, 0xF7];
        MsgView::new(&bytes[..]).write(&mut out).unwrap();
        ControlChangeMsg::new(ch(12), Control::MOD_WHEEL, dv(37))
            .write(&mut out)
            .unwrap();
        assert_eq!(out, [0xF0, 0x7D, 0x01, 0xF7, 0xBC, 0x01, 0x25]);
    }

    #[test]
    #[cfg(feature = "std")]
    fn write_std() {
        let mut out = std::io::Cursor::new(Vec::new());
        Msg::start().write_std(&mut out).unwrap();
        assert_eq!(out.into_inner(), [0xFA]);
    }
}
